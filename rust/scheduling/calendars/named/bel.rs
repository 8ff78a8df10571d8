//! Static holiday data for Belgium.

pub const WEEKMASK: &[u8] = &[5, 6];

pub const COLOR: &str = "#FFD740";

pub const HOLIDAYS: &[(&str, &str)] = &[
    ("2025-01-01", "New Year's Day"),
    ("2025-04-20", "Easter Sunday"),
    ("2025-04-21", "Easter Monday"),
    ("2025-05-01", "Labour Day"),
    ("2025-05-29", "Ascension Day"),
    ("2025-06-08", "Whit Sunday"),
    ("2025-06-09", "Whit Monday"),
    ("2025-07-21", "National Day"),
    ("2025-08-15", "Assumption Day"),
    ("2025-11-01", "All Saints' Day"),
    ("2025-11-11", "Armistice Day"),
    ("2025-12-25", "Christmas Day"),
    ("2026-01-01", "New Year's Day"),
    ("2026-04-05", "Easter Sunday"),
    ("2026-04-06", "Easter Monday"),
    ("2026-05-01", "Labour Day"),
    ("2026-05-14", "Ascension Day"),
    ("2026-05-24", "Whit Sunday"),
    ("2026-05-25", "Whit Monday"),
    ("2026-07-21", "National Day"),
    ("2026-08-15", "Assumption Day"),
    ("2026-11-01", "All Saints' Day"),
    ("2026-11-11", "Armistice Day"),
    ("2026-12-25", "Christmas Day"),
];
