//! Static holiday data for Luxembourg.

pub const WEEKMASK: &[u8] = &[5, 6];

pub const COLOR: &str = "#FF5252";

pub const HOLIDAYS: &[(&str, &str)] = &[
    ("2025-01-01", "New Year's Day"),
    ("2025-04-21", "Easter Monday"),
    ("2025-05-01", "Labour Day"),
    ("2025-05-09", "Europe Day"),
    ("2025-05-29", "Ascension Day"),
    ("2025-06-09", "Whit Monday"),
    ("2025-06-23", "National Day"),
    ("2025-08-15", "Assumption Day"),
    ("2025-11-01", "All Saints' Day"),
    ("2025-12-25", "Christmas Day"),
    ("2025-12-26", "St. Stephen's Day"),
    ("2026-01-01", "New Year's Day"),
    ("2026-04-06", "Easter Monday"),
    ("2026-05-01", "Labour Day"),
    ("2026-05-09", "Europe Day"),
    ("2026-05-14", "Ascension Day"),
    ("2026-05-25", "Whit Monday"),
    ("2026-06-23", "National Day"),
    ("2026-08-15", "Assumption Day"),
    ("2026-11-01", "All Saints' Day"),
    ("2026-12-25", "Christmas Day"),
    ("2026-12-26", "St. Stephen's Day"),
];
