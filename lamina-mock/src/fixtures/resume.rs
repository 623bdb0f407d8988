/// Resume text every mock lexicon has entries for.
///
/// Contains nested entities ("Backend Developer" inside "Senior Backend
/// Developer"), cross-source overlaps ("Moscow" inside "Moscow State
/// University"), and typographic punctuation.
pub const SAMPLE_RESUME: &str = "Ivan Petrov
Senior Backend Developer, Moscow
Contacts: ivan.petrov@example.com, https://github.com/ipetrov

Experience
2019 – 2024 Yandex, Backend Developer
Designed payment services in Rust and Go, cut p99 latency by 40%.
Led a team of 5 engineers.

Education
Moscow State University, Master’s degree in Computer Science, 2017

Skills: Rust, Go, PostgreSQL, Kafka, Kubernetes";
