/// Number of characters in a generated tracking code
pub const TRACKING_CODE_LENGTH: usize = 8;

/// Alphabet used for tracking codes (uppercase letters and digits)
pub const TRACKING_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Consulates offered on the registration form
pub const CONSULATES: &[&str] = &[
    "Istanbul", "Ankara", "Izmir", "Antalya", "Adana", "Gaziantep", "Bursa", "Konya",
];

/// Visa types offered on the registration form
pub const VISA_TYPES: &[&str] = &[
    "Tourist Visa",
    "Business Visa",
    "Student Visa",
    "Work Visa",
    "Residence Visa",
    "Transit Visa",
];

/// Payment methods offered on the payment form
pub const PAYMENT_METHODS: &[&str] = &[
    "Credit Card",
    "Bank Transfer",
    "Cash",
    "Check",
    "PayPal",
    "Other",
];

/// Default number of entries in the upcoming appointments list
pub const UPCOMING_APPOINTMENTS_LIMIT: usize = 5;

/// File name of the SQLite database inside the app data directory
pub const DATABASE_FILE_NAME: &str = "visadesk.db";
