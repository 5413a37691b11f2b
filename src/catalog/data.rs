use super::{Category, Icon, Template};

pub(super) static BUILTIN: &[Template] = &[
    // Customer Service
    Template {
        id: 1,
        category: Category::CustomerService,
        icon: Icon::Target,
        title: "Customer Support Agent",
        description: "Handle customer inquiries using FAQ knowledge base",
        task: "Act as a polite customer success agent for a company. Use the provided FAQ to answer questions. Only answer questions covered in the FAQ.",
        inputs: &["FAQ", "QUESTION"],
        structure: "1. Role definition\n2. Rules for interaction\n3. FAQ placement\n4. Output format with thinking tags",
    },
    Template {
        id: 2,
        category: Category::CustomerService,
        icon: Icon::Target,
        title: "Complaint Handler",
        description: "Handle customer complaints with empathy",
        task: "Act as a skilled customer service representative handling complaints. Show empathy, acknowledge concerns, investigate issues, and propose fair resolutions while maintaining brand voice.",
        inputs: &["COMPLAINT", "CUSTOMER_HISTORY"],
        structure: "1. Acknowledge and empathize\n2. Investigate details\n3. Propose resolution\n4. Follow up plan",
    },
    Template {
        id: 3,
        category: Category::CustomerService,
        icon: Icon::Heart,
        title: "Feedback Collector",
        description: "Gather and analyze customer feedback",
        task: "Act as a feedback specialist who collects customer opinions, categorizes sentiment, identifies trends, and provides actionable insights for product improvement.",
        inputs: &["FEEDBACK_DATA", "PRODUCT_CONTEXT"],
        structure: "1. Categorize feedback\n2. Analyze sentiment\n3. Identify patterns\n4. Recommend actions",
    },
    Template {
        id: 4,
        category: Category::CustomerService,
        icon: Icon::Users,
        title: "Onboarding Guide",
        description: "Help new users get started with a product",
        task: "Guide new users through product onboarding. Explain features step-by-step, anticipate common questions, and ensure users feel confident using the product.",
        inputs: &["PRODUCT_INFO", "USER_GOAL"],
        structure: "1. Welcome and overview\n2. Step-by-step guidance\n3. Pro tips\n4. Next steps",
    },
    Template {
        id: 5,
        category: Category::CustomerService,
        icon: Icon::Award,
        title: "Loyalty Program Expert",
        description: "Explain rewards and benefits to customers",
        task: "Act as a loyalty program specialist who explains benefits, helps customers maximize rewards, and encourages engagement with the program.",
        inputs: &["PROGRAM_DETAILS", "CUSTOMER_STATUS"],
        structure: "1. Current status overview\n2. Available benefits\n3. Recommendations\n4. How to earn more",
    },

    // Analysis
    Template {
        id: 6,
        category: Category::Analysis,
        icon: Icon::MessageSquare,
        title: "Sentence Comparison",
        description: "Check if two sentences convey the same meaning",
        task: "Check whether two sentences say the same thing. Compare their semantic meaning and provide a clear yes/no answer.",
        inputs: &["SENTENCE1", "SENTENCE2"],
        structure: "1. Present both sentences\n2. Analysis (optional)\n3. Clear [YES] or [NO] answer",
    },
    Template {
        id: 7,
        category: Category::Analysis,
        icon: Icon::Shield,
        title: "Content Moderator",
        description: "Review content for policy violations",
        task: "Act as a content moderator who reviews user-generated content against community guidelines. Identify potential violations, categorize them by severity, and recommend actions.",
        inputs: &["CONTENT", "GUIDELINES"],
        structure: "1. Review guidelines\n2. Analyze content systematically\n3. Identify violations\n4. Recommend action with reasoning",
    },
    Template {
        id: 8,
        category: Category::Analysis,
        icon: Icon::TrendingUp,
        title: "Sentiment Analyzer",
        description: "Analyze emotional tone of text",
        task: "Analyze the sentiment and emotional tone of provided text. Identify positive, negative, and neutral elements. Provide an overall assessment with supporting evidence.",
        inputs: &["TEXT", "CONTEXT"],
        structure: "1. Overall sentiment score\n2. Key positive points\n3. Key negative points\n4. Nuanced analysis",
    },
    Template {
        id: 9,
        category: Category::Analysis,
        icon: Icon::Scale,
        title: "Argument Evaluator",
        description: "Assess the strength of arguments",
        task: "Evaluate the logical strength of arguments. Identify premises, conclusions, logical fallacies, and missing evidence. Provide a balanced assessment.",
        inputs: &["ARGUMENT", "CONTEXT"],
        structure: "1. Identify claims\n2. Evaluate evidence\n3. Check logic\n4. Overall assessment",
    },
    Template {
        id: 10,
        category: Category::Analysis,
        icon: Icon::Brain,
        title: "Bias Detector",
        description: "Identify potential biases in content",
        task: "Analyze content for potential biases including political, cultural, gender, or commercial bias. Provide specific examples and suggestions for more balanced presentation.",
        inputs: &["CONTENT", "TOPIC"],
        structure: "1. Type of bias identified\n2. Specific examples\n3. Impact assessment\n4. Neutralization suggestions",
    },

    // Research
    Template {
        id: 11,
        category: Category::Research,
        icon: Icon::FileText,
        title: "Document Q&A",
        description: "Answer questions with document references",
        task: "Answer questions about a document and provide references. Extract relevant quotes and cite them in your answer.",
        inputs: &["DOCUMENT", "QUESTION"],
        structure: "1. Document placement\n2. Quote extraction\n3. Answer with bracketed references",
    },
    Template {
        id: 12,
        category: Category::Research,
        icon: Icon::FileText,
        title: "Research Synthesizer",
        description: "Synthesize information from multiple sources",
        task: "Synthesize information from multiple sources into a coherent analysis. Identify common themes, contradictions, and gaps. Provide a balanced overview with proper attribution.",
        inputs: &["SOURCES", "RESEARCH_QUESTION"],
        structure: "1. Review all sources\n2. Identify themes and patterns\n3. Note contradictions\n4. Synthesize findings",
    },
    Template {
        id: 13,
        category: Category::Research,
        icon: Icon::Globe,
        title: "Fact Checker",
        description: "Verify claims and statements",
        task: "Verify the accuracy of claims and statements. Research evidence, identify reliable sources, and provide a verdict with confidence level.",
        inputs: &["CLAIM", "CONTEXT"],
        structure: "1. State the claim\n2. Evidence review\n3. Source evaluation\n4. Verdict with confidence",
    },
    Template {
        id: 14,
        category: Category::Research,
        icon: Icon::Database,
        title: "Data Interpreter",
        description: "Explain data and statistics clearly",
        task: "Interpret data, statistics, and research findings for a general audience. Explain methodology, significance, limitations, and practical implications.",
        inputs: &["DATA", "AUDIENCE"],
        structure: "1. Key findings summary\n2. Methodology explanation\n3. Limitations\n4. Practical implications",
    },
    Template {
        id: 15,
        category: Category::Research,
        icon: Icon::BookOpen,
        title: "Literature Reviewer",
        description: "Summarize academic literature on a topic",
        task: "Review and summarize academic literature on a specific topic. Identify key theories, methodologies, findings, and gaps in current research.",
        inputs: &["TOPIC", "SCOPE"],
        structure: "1. Overview of field\n2. Key theories\n3. Major findings\n4. Research gaps",
    },

    // Education
    Template {
        id: 16,
        category: Category::Education,
        icon: Icon::Calculator,
        title: "Socratic Math Tutor",
        description: "Guide students through math problems with questions",
        task: "Act as a Socratic tutor for mathematics. Help students learn by asking guiding questions instead of giving direct answers. Use inner monologue to track the correct solution.",
        inputs: &["MATH_QUESTION"],
        structure: "1. Role as Socratic tutor\n2. Inner monologue for solving\n3. Examples of interactions\n4. Student-focused responses",
    },
    Template {
        id: 17,
        category: Category::Education,
        icon: Icon::Lightbulb,
        title: "Concept Explainer",
        description: "Explain complex concepts in simple terms",
        task: "Explain complex concepts in simple, understandable terms. Use analogies, examples, and step-by-step breakdowns. Adapt explanation depth based on the audience level.",
        inputs: &["CONCEPT", "AUDIENCE_LEVEL"],
        structure: "1. Assess concept complexity\n2. Choose appropriate analogies\n3. Build understanding gradually\n4. Verify comprehension",
    },
    Template {
        id: 18,
        category: Category::Education,
        icon: Icon::TestTube,
        title: "Quiz Generator",
        description: "Create educational quizzes and assessments",
        task: "Generate educational quiz questions on a given topic. Include various question types, difficulty levels, and detailed answer explanations.",
        inputs: &["TOPIC", "DIFFICULTY", "NUM_QUESTIONS"],
        structure: "1. Learning objectives\n2. Question variety\n3. Answer key\n4. Explanations",
    },
    Template {
        id: 19,
        category: Category::Education,
        icon: Icon::Clipboard,
        title: "Study Guide Creator",
        description: "Create comprehensive study materials",
        task: "Create a comprehensive study guide for a topic. Include key concepts, definitions, examples, practice problems, and memory aids.",
        inputs: &["SUBJECT", "LEVEL"],
        structure: "1. Overview\n2. Key concepts\n3. Examples\n4. Practice exercises\n5. Summary",
    },
    Template {
        id: 20,
        category: Category::Education,
        icon: Icon::Brain,
        title: "Learning Path Designer",
        description: "Design personalized learning journeys",
        task: "Design a personalized learning path for a student. Assess current knowledge, identify goals, and create a structured curriculum with milestones.",
        inputs: &["CURRENT_LEVEL", "GOAL", "TIMEFRAME"],
        structure: "1. Assessment\n2. Goals definition\n3. Weekly plan\n4. Resources\n5. Milestones",
    },

    // Development
    Template {
        id: 21,
        category: Category::Development,
        icon: Icon::Code,
        title: "Function Caller",
        description: "Answer questions using provided functions",
        task: "Answer questions using functions that are provided. Analyze what information is needed and call appropriate functions to gather data.",
        inputs: &["QUESTION", "FUNCTIONS"],
        structure: "1. Available functions listing\n2. Scratchpad for reasoning\n3. Function call format\n4. Answer synthesis",
    },
    Template {
        id: 22,
        category: Category::Development,
        icon: Icon::Code,
        title: "Code Reviewer",
        description: "Review code for bugs, style, and best practices",
        task: "Act as a senior code reviewer. Analyze code for bugs, security issues, performance problems, and adherence to best practices. Provide constructive feedback with specific suggestions.",
        inputs: &["CODE", "LANGUAGE", "CONTEXT"],
        structure: "1. Understand code purpose\n2. Check for bugs and issues\n3. Evaluate style and practices\n4. Provide actionable feedback",
    },
    Template {
        id: 23,
        category: Category::Development,
        icon: Icon::Lock,
        title: "Security Auditor",
        description: "Identify security vulnerabilities in code",
        task: "Audit code for security vulnerabilities. Identify potential attack vectors, classify severity, and provide remediation recommendations.",
        inputs: &["CODE", "APPLICATION_TYPE"],
        structure: "1. Vulnerability scan\n2. Risk classification\n3. Attack scenarios\n4. Remediation steps",
    },
    Template {
        id: 24,
        category: Category::Development,
        icon: Icon::Zap,
        title: "Code Optimizer",
        description: "Improve code performance and efficiency",
        task: "Analyze code for performance bottlenecks and optimization opportunities. Suggest improvements with benchmarks and trade-off analysis.",
        inputs: &["CODE", "PERFORMANCE_GOALS"],
        structure: "1. Current analysis\n2. Bottlenecks identified\n3. Optimization suggestions\n4. Trade-offs",
    },
    Template {
        id: 25,
        category: Category::Development,
        icon: Icon::FileText,
        title: "API Documentation Writer",
        description: "Create clear API documentation",
        task: "Write comprehensive API documentation. Include endpoints, parameters, request/response examples, error handling, and usage guidelines.",
        inputs: &["API_SPEC", "AUDIENCE"],
        structure: "1. Overview\n2. Authentication\n3. Endpoints\n4. Examples\n5. Error codes",
    },

    // Creative
    Template {
        id: 26,
        category: Category::Creative,
        icon: Icon::Sparkles,
        title: "Content Summarizer",
        description: "Create concise summaries of long content",
        task: "Summarize the provided content into a concise format. Maintain key points while reducing length. Adapt tone based on content type.",
        inputs: &["CONTENT", "TARGET_LENGTH"],
        structure: "1. Content analysis\n2. Key point extraction\n3. Summary generation\n4. Length check",
    },
    Template {
        id: 27,
        category: Category::Creative,
        icon: Icon::PenTool,
        title: "Creative Writer",
        description: "Generate creative content in various styles",
        task: "Act as a creative writer who can produce engaging content in different styles and formats. Adapt tone, vocabulary, and structure based on the requested style and audience.",
        inputs: &["TOPIC", "STYLE", "AUDIENCE"],
        structure: "1. Understand the creative brief\n2. Adapt writing style\n3. Generate content with creativity\n4. Polish and refine",
    },
    Template {
        id: 28,
        category: Category::Creative,
        icon: Icon::Megaphone,
        title: "Marketing Copywriter",
        description: "Write compelling marketing copy",
        task: "Create persuasive marketing copy that drives action. Understand the product, target audience, and desired outcome to craft compelling messages.",
        inputs: &["PRODUCT", "AUDIENCE", "GOAL"],
        structure: "1. Hook/Headline\n2. Pain points\n3. Solution benefits\n4. Call to action",
    },
    Template {
        id: 29,
        category: Category::Creative,
        icon: Icon::Music,
        title: "Story Generator",
        description: "Create engaging narratives and stories",
        task: "Generate creative stories with compelling characters, plot development, and engaging narrative. Adapt genre, tone, and complexity as needed.",
        inputs: &["GENRE", "THEME", "LENGTH"],
        structure: "1. Setting and characters\n2. Rising action\n3. Climax\n4. Resolution",
    },
    Template {
        id: 30,
        category: Category::Creative,
        icon: Icon::Palette,
        title: "Brand Voice Developer",
        description: "Define and maintain brand voice",
        task: "Develop and document a consistent brand voice. Create guidelines for tone, vocabulary, and messaging that reflect brand values and resonate with the target audience.",
        inputs: &["BRAND_INFO", "TARGET_AUDIENCE"],
        structure: "1. Brand personality\n2. Tone guidelines\n3. Vocabulary list\n4. Do/Don't examples",
    },

    // Translation
    Template {
        id: 31,
        category: Category::Translation,
        icon: Icon::Languages,
        title: "Language Translator",
        description: "Translate text while preserving meaning and nuance",
        task: "Translate text from one language to another while preserving the original meaning, tone, and cultural nuances. Handle idioms and expressions appropriately.",
        inputs: &["TEXT", "SOURCE_LANGUAGE", "TARGET_LANGUAGE"],
        structure: "1. Analyze source text\n2. Identify nuances and idioms\n3. Translate with context\n4. Verify accuracy",
    },
    Template {
        id: 32,
        category: Category::Translation,
        icon: Icon::Globe,
        title: "Localization Expert",
        description: "Adapt content for different cultures",
        task: "Localize content for specific cultural contexts. Adapt not just language but also references, examples, and formatting to resonate with the target culture.",
        inputs: &["CONTENT", "TARGET_CULTURE"],
        structure: "1. Cultural analysis\n2. Content adaptation\n3. Reference updates\n4. Format adjustments",
    },
    Template {
        id: 33,
        category: Category::Translation,
        icon: Icon::FileText,
        title: "Technical Translator",
        description: "Translate technical documents accurately",
        task: "Translate technical documents while maintaining accuracy of specialized terminology. Ensure consistency with industry standards and glossaries.",
        inputs: &["DOCUMENT", "DOMAIN", "TARGET_LANGUAGE"],
        structure: "1. Terminology review\n2. Technical translation\n3. Consistency check\n4. Quality verification",
    },

    // Business
    Template {
        id: 34,
        category: Category::Business,
        icon: Icon::Briefcase,
        title: "Email Composer",
        description: "Draft professional emails for various scenarios",
        task: "Compose professional emails tailored to specific business scenarios. Maintain appropriate tone, clarity, and structure while achieving the communication objective.",
        inputs: &["SCENARIO", "RECIPIENT", "KEY_POINTS"],
        structure: "1. Understand context\n2. Choose appropriate tone\n3. Structure email clearly\n4. Include call to action",
    },
    Template {
        id: 35,
        category: Category::Business,
        icon: Icon::Workflow,
        title: "Process Documenter",
        description: "Create clear documentation for processes",
        task: "Document business or technical processes in a clear, step-by-step format. Include prerequisites, detailed steps, expected outcomes, and troubleshooting tips.",
        inputs: &["PROCESS_NAME", "PROCESS_DETAILS"],
        structure: "1. Overview and purpose\n2. Prerequisites list\n3. Step-by-step instructions\n4. Expected outcomes\n5. Troubleshooting",
    },
    Template {
        id: 36,
        category: Category::Business,
        icon: Icon::TrendingUp,
        title: "Business Analyst",
        description: "Analyze business problems and solutions",
        task: "Analyze business problems, evaluate potential solutions, and provide data-driven recommendations. Consider costs, benefits, risks, and implementation factors.",
        inputs: &["PROBLEM", "CONSTRAINTS", "DATA"],
        structure: "1. Problem definition\n2. Analysis\n3. Options evaluation\n4. Recommendation",
    },
    Template {
        id: 37,
        category: Category::Business,
        icon: Icon::Users,
        title: "Meeting Facilitator",
        description: "Structure and summarize meetings",
        task: "Help plan, facilitate, and summarize meetings. Create agendas, capture action items, and ensure productive outcomes.",
        inputs: &["MEETING_PURPOSE", "PARTICIPANTS", "DURATION"],
        structure: "1. Agenda creation\n2. Discussion guide\n3. Time allocation\n4. Action items template",
    },
    Template {
        id: 38,
        category: Category::Business,
        icon: Icon::Clipboard,
        title: "Proposal Writer",
        description: "Write compelling business proposals",
        task: "Create persuasive business proposals. Clearly articulate the problem, proposed solution, benefits, timeline, and pricing.",
        inputs: &["CLIENT_NEED", "SOLUTION", "BUDGET"],
        structure: "1. Executive summary\n2. Problem statement\n3. Solution details\n4. Timeline & pricing",
    },
    Template {
        id: 39,
        category: Category::Business,
        icon: Icon::Award,
        title: "Performance Reviewer",
        description: "Write balanced performance reviews",
        task: "Write constructive performance reviews. Balance positive feedback with areas for improvement, set clear goals, and maintain a supportive tone.",
        inputs: &["EMPLOYEE_INFO", "ACHIEVEMENTS", "AREAS_FOR_GROWTH"],
        structure: "1. Accomplishments\n2. Strengths\n3. Development areas\n4. Goals for next period",
    },
    Template {
        id: 40,
        category: Category::Business,
        icon: Icon::Scale,
        title: "Contract Reviewer",
        description: "Review contracts for key terms and risks",
        task: "Review contracts and agreements for key terms, potential risks, and areas of concern. Summarize important clauses and flag issues.",
        inputs: &["CONTRACT", "CONTEXT"],
        structure: "1. Key terms summary\n2. Rights and obligations\n3. Risk areas\n4. Recommendations",
    },

    // Data
    Template {
        id: 41,
        category: Category::Data,
        icon: Icon::Database,
        title: "SQL Query Writer",
        description: "Generate SQL queries from natural language",
        task: "Convert natural language questions into SQL queries. Understand database schema, optimize query performance, and explain the logic.",
        inputs: &["QUESTION", "SCHEMA"],
        structure: "1. Understand requirement\n2. Generate query\n3. Explain logic\n4. Optimization notes",
    },
    Template {
        id: 42,
        category: Category::Data,
        icon: Icon::TrendingUp,
        title: "Report Generator",
        description: "Create data-driven reports",
        task: "Generate comprehensive reports from data. Include executive summary, key metrics, visualizations, and actionable insights.",
        inputs: &["DATA", "REPORT_TYPE", "AUDIENCE"],
        structure: "1. Executive summary\n2. Key metrics\n3. Detailed analysis\n4. Recommendations",
    },
    Template {
        id: 43,
        category: Category::Data,
        icon: Icon::Brain,
        title: "Insight Extractor",
        description: "Extract actionable insights from data",
        task: "Analyze data to extract meaningful insights. Identify trends, anomalies, correlations, and provide actionable recommendations.",
        inputs: &["DATA", "BUSINESS_CONTEXT"],
        structure: "1. Data overview\n2. Key patterns\n3. Anomalies\n4. Actionable insights",
    },
    Template {
        id: 44,
        category: Category::Data,
        icon: Icon::Calculator,
        title: "Metric Definer",
        description: "Define and explain business metrics",
        task: "Define clear, measurable business metrics. Explain calculation methods, data sources, benchmarks, and how to interpret results.",
        inputs: &["BUSINESS_GOAL", "AVAILABLE_DATA"],
        structure: "1. Metric definition\n2. Calculation method\n3. Data sources\n4. Interpretation guide",
    },
    Template {
        id: 45,
        category: Category::Data,
        icon: Icon::Camera,
        title: "Dashboard Designer",
        description: "Design effective data dashboards",
        task: "Design data dashboards that effectively communicate key information. Recommend visualizations, layouts, and interactive elements.",
        inputs: &["METRICS", "AUDIENCE", "PURPOSE"],
        structure: "1. Dashboard objectives\n2. Key metrics layout\n3. Visualization types\n4. Interactivity specs",
    },
];
