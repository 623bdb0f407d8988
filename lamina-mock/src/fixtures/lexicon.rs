/// A phrase the mock source tags whenever it appears in the text.
pub struct Entry {
    pub phrase: &'static str,
    pub label: &'static str,
    pub confidence: f64,
}

const fn e(phrase: &'static str, label: &'static str, confidence: f64) -> Entry {
    Entry {
        phrase,
        label,
        confidence,
    }
}

pub const STANDARD_LABELS: &[&str] = &[
    "TIME",
    "LINKS",
    "POSITIONS",
    "DEGREE",
    "LOCATION",
    "METRICS",
];

pub const STANDARD: &[Entry] = &[
    e("2019 – 2024", "TIME", 0.91),
    e("2017", "TIME", 0.88),
    e("https://github.com/ipetrov", "LINKS", 0.97),
    e("Senior Backend Developer", "POSITIONS", 0.93),
    e("Backend Developer", "POSITIONS", 0.86),
    e("Master’s degree in Computer Science", "DEGREE", 0.89),
    e("Moscow", "LOCATION", 0.82),
    e("cut p99 latency by 40%", "METRICS", 0.74),
];

pub const COMPANIES_LABELS: &[&str] = &["COMPANIES", "TECHNOLOGIES", "NAME"];

pub const COMPANIES: &[Entry] = &[
    e("Ivan Petrov", "NAME", 0.96),
    e("Yandex", "COMPANIES", 0.95),
    e("Rust", "TECHNOLOGIES", 0.92),
    e("PostgreSQL", "TECHNOLOGIES", 0.9),
    e("Kafka", "TECHNOLOGIES", 0.87),
    e("Kubernetes", "TECHNOLOGIES", 0.9),
];

pub const EXPERIENCE_LABELS: &[&str] = &[
    "RESPONSIBILITIES",
    "EDUCATION",
    "SKILLS",
    "CONTACTS",
    "ACHIEVEMENTS",
];

pub const EXPERIENCE: &[Entry] = &[
    e("Designed payment services in Rust and Go", "RESPONSIBILITIES", 0.71),
    e("Led a team of 5 engineers", "ACHIEVEMENTS", 0.68),
    e("Moscow State University", "EDUCATION", 0.84),
    e("Skills: Rust, Go, PostgreSQL, Kafka, Kubernetes", "SKILLS", 0.77),
    e("ivan.petrov@example.com", "CONTACTS", 0.94),
];
