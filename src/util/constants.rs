// ContactDeck - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ContactDeck";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Workbook
// =============================================================================

/// Default workbook file name, looked up in the working directory when no
/// path is given on the command line.
pub const DEFAULT_WORKBOOK_FILE: &str = "contacts.xlsx";

// =============================================================================
// Catalog limits
// =============================================================================

/// Maximum number of datasets the catalog may define.
pub const MAX_DATASETS: usize = 100;

/// Maximum regex pattern length to prevent ReDoS.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4_096;

// =============================================================================
// Filtering
// =============================================================================

/// Sentinel filter choice that passes all rows.
pub const FILTER_ALL: &str = "All";

// =============================================================================
// Export
// =============================================================================

/// Default file name offered by the CSV export dialog.
pub const EXPORT_FILE_NAME: &str = "contacts.csv";

/// Maximum number of email addresses included in a single copy-to-clipboard
/// operation. Prevents multi-second clipboard writes on pathological sheets.
pub const MAX_CLIPBOARD_EMAILS: usize = 10_000;

// =============================================================================
// Display
// =============================================================================

/// Columns rendered as "Open profile" hyperlinks in the table view.
pub const LINK_COLUMNS: &[&str] = &[
    "Instagram_URL",
    "X_URL",
    "TikTok_URL",
    "Profile_URL",
    "SwedenAbroad_URL",
    "Contact_URL",
];

/// Hyperlink label shown in place of the raw URL.
pub const LINK_LABEL: &str = "Open profile";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Draft messages
// =============================================================================

/// English draft message seeded into the outreach panel. Editable at
/// runtime, never persisted.
pub const MESSAGE_TEMPLATE_EN: &str = "\
Subject: Iran blackout \u{2014} don\u{2019}t let repression happen in the dark\n\
\n\
Hello,\n\
\n\
I\u{2019}m writing with urgency about reports of widespread internet and \
communications disruptions in Iran. When people can\u{2019}t call, upload, or be \
reached, abuses become harder to document\u{2014}and easier to deny.\n\
\n\
Please do not treat this as a distant issue. We need clear, public leadership \
and real pressure. I urge you to:\n\
\u{2022} Speak out and keep attention on Iran\u{2019}s blackout and repression\n\
\u{2022} Support independent reporting and human-rights monitoring\n\
\u{2022} Back practical measures that help restore connectivity and protect civilians\n\
\n\
Every day of silence gives more cover for violence. Please act.\n\
\n\
Sincerely,\n\
[Your name]\n\
[City/Country]";

/// Swedish draft message seeded into the outreach panel.
pub const MESSAGE_TEMPLATE_SV: &str = "\
\u{00c4}mne: Iran st\u{00e4}ngs ner \u{2014} l\u{00e5}t inte f\u{00f6}rtryck ske i m\u{00f6}rker\n\
\n\
Hej,\n\
\n\
Jag skriver med stor oro och br\u{00e5}dska om rapporter om omfattande st\u{00f6}rningar i \
internet och kommunikation i Iran. N\u{00e4}r m\u{00e4}nniskor inte kan ringa, dela \
information eller ens n\u{00e5} varandra blir \u{00f6}vergrepp sv\u{00e5}rare att dokumentera och \
l\u{00e4}ttare att f\u{00f6}rneka.\n\
\n\
Det h\u{00e4}r f\u{00e5}r inte behandlas som en avl\u{00e4}gsen fr\u{00e5}ga. Vi beh\u{00f6}ver tydligt, \
offentligt ledarskap och verklig press. Jag uppmanar dig att:\n\
\u{2022} Agera offentligt och h\u{00e5}lla fokus p\u{00e5} Irans blackout och repression\n\
\u{2022} St\u{00f6}dja oberoende rapportering och m\u{00e4}nniskor\u{00e4}tts\u{00f6}vervakning\n\
\u{2022} St\u{00e4}lla dig bakom konkreta \u{00e5}tg\u{00e4}rder som \u{00e5}terst\u{00e4}ller uppkoppling och skyddar civila\n\
\n\
Varje dag av tystnad ger mer utrymme f\u{00f6}r v\u{00e5}ld. Sn\u{00e4}lla, agera.\n\
\n\
V\u{00e4}nliga h\u{00e4}lsningar,\n\
[Ditt namn]\n\
[Stad/Land]";
