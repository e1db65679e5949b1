//! Static challenge content.
//!
//! Every round is drawn from these pools: 50 emails (20 of them phishing),
//! 55 password entries (15 weak) and 20 employee profiles (10 threats).
//! Nothing here changes at runtime.

use std::fmt;

use serde::Serialize;

/// One message in the phishing inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Email {
    pub id: u32,
    pub sender: &'static str,
    pub subject: &'static str,
    pub date: &'static str,
    pub content: &'static str,
    pub is_phishing: bool,
    /// Giveaways shown once a phishing email is flagged
    pub clues: &'static [&'static str],
}

/// An account in the password audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordEntry {
    pub password: &'static str,
    pub username: &'static str,
    /// Why the password is weak; `None` for strong entries
    pub weakness_reason: Option<&'static str>,
}

impl PasswordEntry {
    pub fn is_weak(&self) -> bool {
        self.weakness_reason.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AccessLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccessLevel::Low => "Low",
            AccessLevel::Medium => "Medium",
            AccessLevel::High => "High",
        };
        f.write_str(label)
    }
}

/// An employee profile in the insider threat review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub name: &'static str,
    pub role: &'static str,
    pub department: &'static str,
    pub access_level: AccessLevel,
    pub last_login: &'static str,
    pub login_location: &'static str,
    pub recent_activity: &'static str,
    pub suspicious_indicators: Option<&'static str>,
}

impl Employee {
    pub fn is_threat(&self) -> bool {
        self.suspicious_indicators.is_some()
    }
}

/// One block of the intro briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroStep {
    pub title: &'static str,
    pub content: &'static str,
}

pub const INTRO_STEPS: [IntroStep; 6] = [
    IntroStep {
        title: "Welcome to CyberQuest",
        content: "You are about to embark on a journey to master cybersecurity skills. Your mission: identify and prevent various security threats.",
    },
    IntroStep {
        title: "The Challenge",
        content: "A sophisticated hacker has infiltrated your organization's systems. You must prove your expertise by completing three critical challenges.",
    },
    IntroStep {
        title: "Level 1: Phishing Detection",
        content: "First, you'll learn to identify phishing emails. Look for suspicious sender addresses, urgent requests, and unusual content.",
    },
    IntroStep {
        title: "Level 2: Password Security",
        content: "Next, you'll master password security. Identify weak passwords and create strong ones that meet security requirements.",
    },
    IntroStep {
        title: "Level 3: Insider Threat Detection",
        content: "Finally, you'll analyze employee profiles to identify potential insider threats. Look for unusual patterns in behavior and access.",
    },
    IntroStep {
        title: "Ready to Begin?",
        content: "Your cybersecurity training starts now. Press Enter to begin the first challenge.",
    },
];

/// The intro briefing as terminal lines, one block per step.
pub fn intro_lines() -> Vec<String> {
    INTRO_STEPS
        .iter()
        .map(|step| format!("\n{}\n{}\n", step.title, step.content))
        .collect()
}

pub const PHISHING_TIPS: &[&str] = &[
    "Check the sender's email address carefully",
    "Be suspicious of urgent or threatening language",
    "Hover over links to see the actual URL before clicking",
    "Watch for spelling and grammar errors",
    "Be cautious of unexpected attachments",
    "Verify requests for sensitive information through other channels",
];

pub const PASSWORD_TIPS: &[&str] = &[
    "Use a minimum of 12 characters",
    "Include uppercase and lowercase letters, numbers, and symbols",
    "Avoid using personal information",
    "Don't use common words or patterns",
    "Use a unique password for each account",
    "Consider using a password manager",
];

pub const INSIDER_THREAT_TIPS: &[&str] = &[
    "Look for unusual access times or locations",
    "Pay attention to large data downloads",
    "Watch for attempts to access systems beyond normal job duties",
    "Notice multiple failed login attempts",
    "Check for emails sent to personal accounts with attachments",
];

pub static EMAILS: [Email; 50] = [
    Email {
        id: 1,
        sender: "HR Department <hr@company.com>",
        subject: "Updated Company Policies",
        date: "10:34 AM",
        content: "Dear Employee, Please review the updated company policies attached to this email. These changes will take effect next month. Thank you, HR Department",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 2,
        sender: "Google Drive <notification@google.com>",
        subject: "Document Shared With You",
        date: "2:15 PM",
        content: "John Doe has shared a document with you. Click here to view the document. Google Drive Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 3,
        sender: "Team Meeting <john.smith@company.com>",
        subject: "Weekly Team Meeting Agenda",
        date: "9:45 AM",
        content: "Hello team, Attached is the agenda for our weekly meeting this Friday at 2 PM. Please review and come prepared with any additional items. Best, John",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 4,
        sender: "Payroll Department <payroll@company.com>",
        subject: "Your Monthly Payslip",
        date: "1:20 PM",
        content: "Dear Employee, Your payslip for the current month has been generated. You can access it through the HR portal. Best regards, Payroll Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 5,
        sender: "IT Support <support@company.com>",
        subject: "System Maintenance Notice",
        date: "3:45 PM",
        content: "Dear Staff, We will be conducting system maintenance this weekend. The system will be unavailable from 2 AM to 4 AM on Sunday. Thank you for your understanding.",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 6,
        sender: "Training Department <training@company.com>",
        subject: "Mandatory Security Training",
        date: "11:30 AM",
        content: "Dear Employee, Please complete the mandatory security training by the end of this week. You can access it through the learning portal. Best regards, Training Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 7,
        sender: "Benefits Team <benefits@company.com>",
        subject: "Open Enrollment Period",
        date: "4:15 PM",
        content: "Dear Employee, The open enrollment period for benefits begins next week. Please review your options in the benefits portal. Best regards, Benefits Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 8,
        sender: "Facilities <facilities@company.com>",
        subject: "Office Maintenance Schedule",
        date: "9:20 AM",
        content: "Dear Staff, The office will be undergoing maintenance next week. Please ensure your workstations are clear of personal items. Thank you for your cooperation.",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 9,
        sender: "Legal Department <legal@company.com>",
        subject: "Updated Compliance Guidelines",
        date: "2:40 PM",
        content: "Dear Employee, Please review the updated compliance guidelines attached to this email. These changes are effective immediately. Best regards, Legal Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 10,
        sender: "Marketing Team <marketing@company.com>",
        subject: "New Campaign Launch",
        date: "10:15 AM",
        content: "Dear Team, We are excited to announce the launch of our new marketing campaign. Please review the attached materials and provide feedback by Friday.",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 11,
        sender: "IT Support <it-support@c0mpany.net>",
        subject: "URGENT: Your Password Will Expire",
        date: "11:02 AM",
        content: "Dear User, Your password will expire in 24 hours. Click here to reset your password immediately: http://password-reset.c0mpany.net/login. IT Support",
        is_phishing: true,
        clues: &[
            "Suspicious domain (c0mpany.net instead of company.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 12,
        sender: "FedEx Shipping <fedex-shipping@fedex-delivery.info>",
        subject: "Your Package Delivery Status",
        date: "4:30 PM",
        content: "Dear Customer, Your package is pending delivery. Please confirm your address details by clicking on this link: http://fedx-delivery.info/confirm?id=12345. FedEx Shipping Team",
        is_phishing: true,
        clues: &[
            "Suspicious domain (fedex-delivery.info)",
            "Misspelled company name in URL (fedx)",
            "Request for personal information",
        ],
    },
    Email {
        id: 13,
        sender: "PayPal Security <security@paypal-secure.com>",
        subject: "Account Suspension Notice",
        date: "3:15 PM",
        content: "Dear PayPal User, Your account has been suspended due to suspicious activity. Click here to verify your identity: http://paypal-secure.com/verify. PayPal Security Team",
        is_phishing: true,
        clues: &[
            "Suspicious domain (paypal-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 14,
        sender: "Bank Security <security@bank-secure.net>",
        subject: "Unusual Activity Detected",
        date: "2:45 PM",
        content: "Dear Customer, We detected unusual activity on your account. Please verify your identity by clicking here: http://bank-secure.net/verify. Bank Security Team",
        is_phishing: true,
        clues: &[
            "Suspicious domain (bank-secure.net)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 15,
        sender: "Apple Support <support@apple-secure.com>",
        subject: "iCloud Account Locked",
        date: "1:30 PM",
        content: "Dear Apple User, Your iCloud account has been locked for security reasons. Click here to unlock: http://apple-secure.com/unlock. Apple Support Team",
        is_phishing: true,
        clues: &[
            "Suspicious domain (apple-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 16,
        sender: "Project Manager <pm@company.com>",
        subject: "Project Status Update",
        date: "10:45 AM",
        content: "Dear Team, Please find attached the latest project status report. Review and provide feedback by end of day. Best regards, Project Manager",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 17,
        sender: "Recruitment <recruitment@company.com>",
        subject: "New Hire Orientation",
        date: "9:30 AM",
        content: "Dear Team, We have new hires joining next week. Please review the orientation schedule attached. Best regards, Recruitment Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 18,
        sender: "Quality Assurance <qa@company.com>",
        subject: "QA Report Submission",
        date: "2:20 PM",
        content: "Dear Team, Please submit your QA reports by the end of this week. The template is attached. Best regards, QA Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 19,
        sender: "Research Department <research@company.com>",
        subject: "Research Findings Presentation",
        date: "11:15 AM",
        content: "Dear Team, Please review the attached research findings before tomorrow's presentation. Best regards, Research Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 20,
        sender: "Customer Support <support@company.com>",
        subject: "Customer Feedback Summary",
        date: "3:30 PM",
        content: "Dear Team, Please find attached the monthly customer feedback summary. Review and provide suggestions for improvement. Best regards, Support Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 21,
        sender: "Microsoft Support <support@microsoft-secure.net>",
        subject: "Windows Security Alert",
        date: "4:15 PM",
        content: "Dear Windows User, Your system has been compromised. Click here to secure your computer: http://microsoft-secure.net/secure. Microsoft Support",
        is_phishing: true,
        clues: &[
            "Suspicious domain (microsoft-secure.net)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 22,
        sender: "Amazon Security <security@amazon-secure.com>",
        subject: "Order Verification Required",
        date: "1:45 PM",
        content: "Dear Customer, Your recent order requires verification. Click here to verify: http://amazon-secure.com/verify. Amazon Security Team",
        is_phishing: true,
        clues: &[
            "Suspicious domain (amazon-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 23,
        sender: "Netflix Support <support@netflix-secure.net>",
        subject: "Account Security Alert",
        date: "2:30 PM",
        content: "Dear Netflix User, Your account has been accessed from a new device. Click here to verify: http://netflix-secure.net/verify. Netflix Support",
        is_phishing: true,
        clues: &[
            "Suspicious domain (netflix-secure.net)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 24,
        sender: "Instagram Security <security@instagram-secure.com>",
        subject: "Account Recovery Required",
        date: "3:45 PM",
        content: "Dear User, Your Instagram account needs recovery. Click here to recover: http://instagram-secure.com/recover. Instagram Security",
        is_phishing: true,
        clues: &[
            "Suspicious domain (instagram-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 25,
        sender: "LinkedIn Support <support@linkedin-secure.net>",
        subject: "Profile Security Alert",
        date: "4:20 PM",
        content: "Dear LinkedIn User, Your profile has been flagged for review. Click here to verify: http://linkedin-secure.net/verify. LinkedIn Support",
        is_phishing: true,
        clues: &[
            "Suspicious domain (linkedin-secure.net)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 26,
        sender: "Development Team <dev@company.com>",
        subject: "Code Review Request",
        date: "10:20 AM",
        content: "Dear Team, Please review the latest code changes in the repository. Your feedback is appreciated. Best regards, Dev Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 27,
        sender: "Design Team <design@company.com>",
        subject: "Design System Update",
        date: "11:30 AM",
        content: "Dear Team, The design system has been updated. Please review the changes and update your components accordingly. Best regards, Design Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 28,
        sender: "Product Team <product@company.com>",
        subject: "Product Roadmap Review",
        date: "2:15 PM",
        content: "Dear Team, Please review the updated product roadmap and provide feedback by Friday. Best regards, Product Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 29,
        sender: "Sales Team <sales@company.com>",
        subject: "Monthly Sales Report",
        date: "3:20 PM",
        content: "Dear Team, Please find attached the monthly sales report. Review and prepare for tomorrow's meeting. Best regards, Sales Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 30,
        sender: "Operations <operations@company.com>",
        subject: "Process Improvement Meeting",
        date: "9:15 AM",
        content: "Dear Team, We will be discussing process improvements in tomorrow's meeting. Please review the attached document. Best regards, Operations Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 31,
        sender: "Dropbox Security <security@dropbox-secure.com>",
        subject: "Storage Limit Exceeded",
        date: "1:20 PM",
        content: "Dear User, Your Dropbox storage limit has been exceeded. Click here to upgrade: http://dropbox-secure.com/upgrade. Dropbox Security",
        is_phishing: true,
        clues: &[
            "Suspicious domain (dropbox-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 32,
        sender: "Google Security <security@google-secure.net>",
        subject: "Account Security Alert",
        date: "2:45 PM",
        content: "Dear Google User, Your account has been accessed from a new location. Click here to verify: http://google-secure.net/verify. Google Security",
        is_phishing: true,
        clues: &[
            "Suspicious domain (google-secure.net)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 33,
        sender: "Twitter Support <support@twitter-secure.com>",
        subject: "Account Verification Required",
        date: "3:30 PM",
        content: "Dear User, Your Twitter account needs verification. Click here to verify: http://twitter-secure.com/verify. Twitter Support",
        is_phishing: true,
        clues: &[
            "Suspicious domain (twitter-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 34,
        sender: "Adobe Security <security@adobe-secure.net>",
        subject: "Subscription Expiring",
        date: "4:15 PM",
        content: "Dear Customer, Your Adobe subscription is expiring soon. Click here to renew: http://adobe-secure.net/renew. Adobe Security",
        is_phishing: true,
        clues: &[
            "Suspicious domain (adobe-secure.net)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 35,
        sender: "Spotify Support <support@spotify-secure.com>",
        subject: "Payment Verification Required",
        date: "1:45 PM",
        content: "Dear User, Your payment method needs verification. Click here to verify: http://spotify-secure.com/verify. Spotify Support",
        is_phishing: true,
        clues: &[
            "Suspicious domain (spotify-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 36,
        sender: "HR Benefits <benefits@company.com>",
        subject: "Benefits Enrollment Reminder",
        date: "10:30 AM",
        content: "Dear Employee, This is a reminder that the benefits enrollment period ends next week. Please complete your selections. Best regards, Benefits Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 37,
        sender: "Training Coordinator <training@company.com>",
        subject: "Mandatory Training Reminder",
        date: "11:15 AM",
        content: "Dear Employee, Please complete the mandatory training modules by the end of this week. Best regards, Training Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 38,
        sender: "IT Helpdesk <helpdesk@company.com>",
        subject: "System Update Notice",
        date: "2:30 PM",
        content: "Dear Staff, The system will be updated tonight at 2 AM. Please save your work before leaving. Best regards, IT Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 39,
        sender: "Facilities Management <facilities@company.com>",
        subject: "Office Maintenance Schedule",
        date: "3:45 PM",
        content: "Dear Staff, The office will be undergoing maintenance this weekend. Please ensure your workstations are clear. Best regards, Facilities Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 40,
        sender: "Security Team <security@company.com>",
        subject: "Security Awareness Training",
        date: "9:20 AM",
        content: "Dear Employee, Please complete the security awareness training by the end of this month. Best regards, Security Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 41,
        sender: "PayPal Security <security@paypal-secure.net>",
        subject: "Account Security Alert",
        date: "1:30 PM",
        content: "Dear User, Your PayPal account has been locked. Click here to unlock: http://paypal-secure.net/unlock. PayPal Security",
        is_phishing: true,
        clues: &[
            "Suspicious domain (paypal-secure.net)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 42,
        sender: "Amazon Support <support@amazon-secure.com>",
        subject: "Order Confirmation Required",
        date: "2:15 PM",
        content: "Dear Customer, Your recent order needs confirmation. Click here to confirm: http://amazon-secure.com/confirm. Amazon Support",
        is_phishing: true,
        clues: &[
            "Suspicious domain (amazon-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 43,
        sender: "Netflix Security <security@netflix-secure.com>",
        subject: "Account Security Alert",
        date: "3:20 PM",
        content: "Dear User, Your Netflix account has been accessed from a new device. Click here to verify: http://netflix-secure.com/verify. Netflix Security",
        is_phishing: true,
        clues: &[
            "Suspicious domain (netflix-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 44,
        sender: "Instagram Support <support@instagram-secure.net>",
        subject: "Account Recovery Required",
        date: "4:30 PM",
        content: "Dear User, Your Instagram account needs recovery. Click here to recover: http://instagram-secure.net/recover. Instagram Support",
        is_phishing: true,
        clues: &[
            "Suspicious domain (instagram-secure.net)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 45,
        sender: "LinkedIn Security <security@linkedin-secure.com>",
        subject: "Profile Security Alert",
        date: "1:45 PM",
        content: "Dear User, Your LinkedIn profile has been flagged. Click here to verify: http://linkedin-secure.com/verify. LinkedIn Security",
        is_phishing: true,
        clues: &[
            "Suspicious domain (linkedin-secure.com)",
            "Creates urgency",
            "Contains suspicious link",
        ],
    },
    Email {
        id: 46,
        sender: "Project Manager <pm@company.com>",
        subject: "Project Timeline Update",
        date: "10:15 AM",
        content: "Dear Team, Please review the updated project timeline and provide feedback by end of day. Best regards, Project Manager",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 47,
        sender: "Quality Assurance <qa@company.com>",
        subject: "QA Report Submission",
        date: "11:30 AM",
        content: "Dear Team, Please submit your QA reports by the end of this week. The template is attached. Best regards, QA Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 48,
        sender: "Research Department <research@company.com>",
        subject: "Research Findings Presentation",
        date: "2:20 PM",
        content: "Dear Team, Please review the attached research findings before tomorrow's presentation. Best regards, Research Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 49,
        sender: "Customer Support <support@company.com>",
        subject: "Customer Feedback Summary",
        date: "3:15 PM",
        content: "Dear Team, Please find attached the monthly customer feedback summary. Review and provide suggestions for improvement. Best regards, Support Team",
        is_phishing: false,
        clues: &[],
    },
    Email {
        id: 50,
        sender: "Development Team <dev@company.com>",
        subject: "Code Review Request",
        date: "9:45 AM",
        content: "Dear Team, Please review the latest code changes in the repository. Your feedback is appreciated. Best regards, Dev Team",
        is_phishing: false,
        clues: &[],
    },
];

pub static PASSWORDS: [PasswordEntry; 55] = [
    PasswordEntry {
        password: "password123",
        username: "admin",
        weakness_reason: Some("Common word with predictable numbers"),
    },
    PasswordEntry {
        password: "qwerty",
        username: "user1",
        weakness_reason: Some("Keyboard pattern, too short"),
    },
    PasswordEntry {
        password: "company2023",
        username: "jdoe",
        weakness_reason: Some("Contains company name and current year"),
    },
    PasswordEntry {
        password: "123456",
        username: "guest",
        weakness_reason: Some("Simple numeric sequence"),
    },
    PasswordEntry {
        password: "letmein",
        username: "support",
        weakness_reason: Some("Common password phrase"),
    },
    PasswordEntry {
        password: "admin123",
        username: "administrator",
        weakness_reason: Some("Common username as password with numbers"),
    },
    PasswordEntry {
        password: "welcome1",
        username: "newuser",
        weakness_reason: Some("Common word with predictable number"),
    },
    PasswordEntry {
        password: "football",
        username: "sportsfan",
        weakness_reason: Some("Common word, no numbers or special characters"),
    },
    PasswordEntry {
        password: "abc123",
        username: "testuser",
        weakness_reason: Some("Simple pattern, too short"),
    },
    PasswordEntry {
        password: "monkey123",
        username: "user123",
        weakness_reason: Some("Common word with predictable numbers"),
    },
    PasswordEntry {
        password: "dragon",
        username: "gamer",
        weakness_reason: Some("Single word, no complexity"),
    },
    PasswordEntry {
        password: "baseball",
        username: "player",
        weakness_reason: Some("Common word, no numbers or special characters"),
    },
    PasswordEntry {
        password: "butterfly",
        username: "nature",
        weakness_reason: Some("Single word, no complexity"),
    },
    PasswordEntry {
        password: "superman",
        username: "hero",
        weakness_reason: Some("Common word, no numbers or special characters"),
    },
    PasswordEntry {
        password: "tiger123",
        username: "animal",
        weakness_reason: Some("Common word with predictable numbers"),
    },
    PasswordEntry {
        password: "P@ssw0rd!2024",
        username: "secure_user",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Kj9#mP2$vL5nX8",
        username: "admin_secure",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Qw3rty!@#123",
        username: "user_secure",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "M0n3y$B@nk2024",
        username: "finance_user",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "S3cur3P@ss!",
        username: "security_user",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "R@nd0mP@ss!",
        username: "random_user",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Str0ng!P@ss",
        username: "strong_user",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "C0mpl3x!P@ss",
        username: "complex_user",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "S@f3P@ssw0rd",
        username: "safe_user",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "H@rd2Gu3ss!",
        username: "hard_user",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "P@ssw0rd!2024",
        username: "secure_user2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Kj9#mP2$vL5nX8",
        username: "admin_secure2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Qw3rty!@#123",
        username: "user_secure2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "M0n3y$B@nk2024",
        username: "finance_user2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "S3cur3P@ss!",
        username: "security_user2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "R@nd0mP@ss!",
        username: "random_user2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Str0ng!P@ss",
        username: "strong_user2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "C0mpl3x!P@ss",
        username: "complex_user2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "S@f3P@ssw0rd",
        username: "safe_user2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "H@rd2Gu3ss!",
        username: "hard_user2",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "P@ssw0rd!2024",
        username: "secure_user3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Kj9#mP2$vL5nX8",
        username: "admin_secure3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Qw3rty!@#123",
        username: "user_secure3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "M0n3y$B@nk2024",
        username: "finance_user3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "S3cur3P@ss!",
        username: "security_user3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "R@nd0mP@ss!",
        username: "random_user3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Str0ng!P@ss",
        username: "strong_user3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "C0mpl3x!P@ss",
        username: "complex_user3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "S@f3P@ssw0rd",
        username: "safe_user3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "H@rd2Gu3ss!",
        username: "hard_user3",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "P@ssw0rd!2024",
        username: "secure_user4",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Kj9#mP2$vL5nX8",
        username: "admin_secure4",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Qw3rty!@#123",
        username: "user_secure4",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "M0n3y$B@nk2024",
        username: "finance_user4",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "S3cur3P@ss!",
        username: "security_user4",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "R@nd0mP@ss!",
        username: "random_user4",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "Str0ng!P@ss",
        username: "strong_user4",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "C0mpl3x!P@ss",
        username: "complex_user4",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "S@f3P@ssw0rd",
        username: "safe_user4",
        weakness_reason: None,
    },
    PasswordEntry {
        password: "H@rd2Gu3ss!",
        username: "hard_user4",
        weakness_reason: None,
    },
];

pub static EMPLOYEES: [Employee; 20] = [
    Employee {
        name: "Sarah Chen",
        role: "Software Engineer",
        department: "Engineering",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 09:30",
        login_location: "San Francisco, CA",
        recent_activity: "Normal development work, code reviews, team meetings",
        suspicious_indicators: None,
    },
    Employee {
        name: "Michael Rodriguez",
        role: "IT Support Specialist",
        department: "IT",
        access_level: AccessLevel::Medium,
        last_login: "2024-02-15 10:15",
        login_location: "New York, NY",
        recent_activity: "Regular system maintenance, user support tickets",
        suspicious_indicators: None,
    },
    Employee {
        name: "Emily Thompson",
        role: "HR Manager",
        department: "Human Resources",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 08:45",
        login_location: "Chicago, IL",
        recent_activity: "Employee onboarding, policy updates, team meetings",
        suspicious_indicators: None,
    },
    Employee {
        name: "David Kim",
        role: "Security Analyst",
        department: "Security",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 11:20",
        login_location: "Seattle, WA",
        recent_activity: "Security monitoring, threat analysis, team training",
        suspicious_indicators: None,
    },
    Employee {
        name: "Lisa Patel",
        role: "Data Analyst",
        department: "Analytics",
        access_level: AccessLevel::Medium,
        last_login: "2024-02-15 09:15",
        login_location: "Boston, MA",
        recent_activity: "Data analysis, report generation, team meetings",
        suspicious_indicators: None,
    },
    Employee {
        name: "James Wilson",
        role: "Network Engineer",
        department: "IT",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 10:30",
        login_location: "Austin, TX",
        recent_activity: "Network maintenance, security updates, team meetings",
        suspicious_indicators: None,
    },
    Employee {
        name: "Rachel Martinez",
        role: "Product Manager",
        department: "Product",
        access_level: AccessLevel::Medium,
        last_login: "2024-02-15 08:30",
        login_location: "Denver, CO",
        recent_activity: "Product planning, stakeholder meetings, team updates",
        suspicious_indicators: None,
    },
    Employee {
        name: "Thomas Anderson",
        role: "Database Administrator",
        department: "IT",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 09:45",
        login_location: "Portland, OR",
        recent_activity: "Database maintenance, backup verification, team meetings",
        suspicious_indicators: None,
    },
    Employee {
        name: "Sophia Chen",
        role: "UX Designer",
        department: "Design",
        access_level: AccessLevel::Low,
        last_login: "2024-02-15 10:00",
        login_location: "San Diego, CA",
        recent_activity: "Design reviews, user research, team meetings",
        suspicious_indicators: None,
    },
    Employee {
        name: "Daniel Lee",
        role: "Marketing Manager",
        department: "Marketing",
        access_level: AccessLevel::Medium,
        last_login: "2024-02-15 08:15",
        login_location: "Miami, FL",
        recent_activity: "Campaign planning, content review, team meetings",
        suspicious_indicators: None,
    },
    Employee {
        name: "Alex Thompson",
        role: "System Administrator",
        department: "IT",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 03:30",
        login_location: "Unknown",
        recent_activity: "Multiple failed login attempts, unusual file access patterns, unauthorized system changes",
        suspicious_indicators: Some("Unusual login time, unknown location, multiple failed attempts"),
    },
    Employee {
        name: "Maria Garcia",
        role: "Financial Analyst",
        department: "Finance",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 02:15",
        login_location: "Multiple locations",
        recent_activity: "Massive data downloads, unauthorized access to sensitive files, attempts to bypass security",
        suspicious_indicators: Some("Multiple login locations, unusual data access patterns"),
    },
    Employee {
        name: "Kevin O'Brien",
        role: "Database Developer",
        department: "IT",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 04:45",
        login_location: "Remote location",
        recent_activity: "Suspicious database queries, unauthorized schema changes, attempts to export data",
        suspicious_indicators: Some("Unusual database access patterns, unauthorized changes"),
    },
    Employee {
        name: "Sarah Johnson",
        role: "HR Specialist",
        department: "Human Resources",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 01:30",
        login_location: "Multiple IP addresses",
        recent_activity: "Unauthorized access to employee records, suspicious file downloads, attempts to modify access levels",
        suspicious_indicators: Some("Multiple IP addresses, unauthorized record access"),
    },
    Employee {
        name: "David Chen",
        role: "Security Engineer",
        department: "Security",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 05:15",
        login_location: "Unknown",
        recent_activity: "Attempts to disable security controls, suspicious network activity, unauthorized system modifications",
        suspicious_indicators: Some("Attempts to disable security, unknown location"),
    },
    Employee {
        name: "Emma Wilson",
        role: "Data Scientist",
        department: "Analytics",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 03:00",
        login_location: "Multiple locations",
        recent_activity: "Massive data extraction attempts, unauthorized access to sensitive datasets, suspicious queries",
        suspicious_indicators: Some("Multiple locations, unusual data access"),
    },
    Employee {
        name: "James Martinez",
        role: "Network Administrator",
        department: "IT",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 02:30",
        login_location: "Remote location",
        recent_activity: "Unauthorized network configuration changes, suspicious traffic patterns, attempts to bypass firewalls",
        suspicious_indicators: Some("Unauthorized network changes, suspicious traffic"),
    },
    Employee {
        name: "Sophie Anderson",
        role: "System Engineer",
        department: "Engineering",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 04:00",
        login_location: "Unknown",
        recent_activity: "Attempts to modify system configurations, suspicious file transfers, unauthorized access attempts",
        suspicious_indicators: Some("Unknown location, unauthorized modifications"),
    },
    Employee {
        name: "Ryan Kim",
        role: "IT Manager",
        department: "IT",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 01:15",
        login_location: "Multiple IP addresses",
        recent_activity: "Suspicious privilege escalation attempts, unauthorized system changes, attempts to modify audit logs",
        suspicious_indicators: Some("Multiple IP addresses, privilege escalation attempts"),
    },
    Employee {
        name: "Lisa Chen",
        role: "Security Analyst",
        department: "Security",
        access_level: AccessLevel::High,
        last_login: "2024-02-15 05:30",
        login_location: "Remote location",
        recent_activity: "Attempts to disable security monitoring, suspicious access patterns, unauthorized system modifications",
        suspicious_indicators: Some("Attempts to disable monitoring, suspicious access"),
    },
];
