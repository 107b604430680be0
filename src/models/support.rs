//! Help and support content.

/// A frequently asked question.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A way to reach support.
#[derive(Debug, Clone, Copy)]
pub struct SupportChannel {
    pub name: &'static str,
    pub contact: &'static str,
    pub hours: &'static str,
}

/// Help option tile.
#[derive(Debug, Clone, Copy)]
pub struct HelpOption {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HELP_OPTIONS: [HelpOption; 3] = [
    HelpOption {
        title: "Contact Support",
        description: "Get in touch with our support team",
    },
    HelpOption {
        title: "Documentation",
        description: "Browse our comprehensive guides",
    },
    HelpOption {
        title: "FAQ",
        description: "Find answers to common questions",
    },
];

pub const SUPPORT_CHANNELS: [SupportChannel; 2] = [
    SupportChannel {
        name: "Phone Support",
        contact: "+1 (800) 123-4567",
        hours: "Mon-Fri, 9AM-6PM EST",
    },
    SupportChannel {
        name: "Email Support",
        contact: "support@careerbridge.com",
        hours: "Response within 24 hours",
    },
];

pub const FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "How long does the application process take?",
        answer: "The typical application process takes 5-10 business days from submission to completion.",
    },
    FaqEntry {
        question: "What documents do I need to upload?",
        answer: "You'll need to upload your resume, ID, previous certificates, transcripts, and work experience documents.",
    },
    FaqEntry {
        question: "Can I track my application status?",
        answer: "Yes, you can track your application status in real-time using your application ID on the Track Application page.",
    },
    FaqEntry {
        question: "What payment methods are accepted?",
        answer: "We accept credit cards, Afterpay, and EduPay for your convenience.",
    },
];
