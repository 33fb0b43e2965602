#[derive(Debug, Clone, Copy)]
pub struct PersonaDef {
    pub id: &'static str,
    pub name: &'static str,
    pub personality: &'static str,
    pub focus: &'static [&'static str],
    pub prompts: &'static [&'static str],
}

pub const DEFAULT_PERSONA_ID: &str = "vc";

const VC_PROMPTS: &[&str] = &[
    "Let's start with the fundamentals. What problem are you solving, and how big is the market opportunity?",
    "Walk me through your unit economics. What's your customer acquisition cost versus lifetime value?",
    "Show me the numbers. What's your current traction, and what's your growth trajectory?",
    "Who are your main competitors, and why will you win this market?",
    "What are your revenue projections for the next 3 years? How did you arrive at these numbers?",
    "Tell me about your team. Why are you the right people to execute this vision?",
    "How much capital are you raising, and how will you deploy it? What milestones will this get you to?",
    "What's your exit strategy? Who would potentially acquire you, and why?",
];

const ANGEL_PROMPTS: &[&str] = &[
    "I'd love to hear your story. What inspired you to start this company?",
    "Tell me about the problem you're solving. Have you experienced this pain point yourself?",
    "What's your vision for where this company could be in 5 years?",
    "How are you thinking about building your team and company culture?",
    "What keeps you up at night? What are your biggest challenges right now?",
    "How do you plan to acquire your first 100 customers?",
    "What feedback have you gotten from potential customers so far?",
    "What would success look like for you personally with this venture?",
];

const TECH_PROMPTS: &[&str] = &[
    "Tell me about your technology stack. What makes your solution technically superior?",
    "What are your key technical differentiators? Do you have any proprietary technology or IP?",
    "How scalable is your platform? What happens when you 10x your user base?",
    "Walk me through your product roadmap. What are the critical features you're building next?",
    "How are you thinking about data security and privacy?",
    "What's your tech team's background? Do you have the right technical talent?",
    "How defensible is your technology? What prevents someone from copying your solution?",
    "What's your approach to product development and iteration?",
];

const INDUSTRY_PROMPTS: &[&str] = &[
    "How well do you understand this market? Walk me through the industry dynamics.",
    "What's your go-to-market strategy? How will you reach your target customers?",
    "Who are the key players in this space, and what's your competitive positioning?",
    "How do you plan to achieve product-market fit? What evidence do you have so far?",
    "What are the biggest execution risks you're facing?",
    "Tell me about your distribution strategy. How will you scale customer acquisition?",
    "What regulatory or compliance challenges exist in your market?",
    "How do you plan to capture market share from incumbents?",
];

const BUILTIN_PERSONAS: &[PersonaDef] = &[
    PersonaDef {
        id: "vc",
        name: "Venture Capitalist",
        personality: "Aggressive, ROI-focused",
        focus: &["Market size", "Scalability", "Revenue model"],
        prompts: VC_PROMPTS,
    },
    PersonaDef {
        id: "angel",
        name: "Angel Investor",
        personality: "Supportive, mentoring style",
        focus: &["Team strength", "Vision", "Passion"],
        prompts: ANGEL_PROMPTS,
    },
    PersonaDef {
        id: "tech",
        name: "Tech Investor",
        personality: "Product and innovation focused",
        focus: &["Technology", "Innovation", "Competitive advantage"],
        prompts: TECH_PROMPTS,
    },
    PersonaDef {
        id: "industry",
        name: "Industry Expert",
        personality: "Market and execution focused",
        focus: &["Market fit", "Execution", "Go-to-market"],
        prompts: INDUSTRY_PROMPTS,
    },
];

pub fn builtin_personas() -> &'static [PersonaDef] {
    BUILTIN_PERSONAS
}
