use std::path::PathBuf;

pub(crate) const SAMPLE: &str = "tests/data/sample.txt";
pub(crate) const MALFORMED: &str = "tests/data/malformed.txt";

pub(crate) fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(name)
}

/// Lines from the dictionary sample, for in-memory runs.
pub(crate) fn get_test_corpus() -> Vec<String> {
    [
        "книжки книжка noun:f:v_rod",
        "книжки книжка noun:p:v_naz",
        "гарний гарний adj:m:v_naz",
        "гарна гарний adj:f:v_naz",
        "робити робити verb:imperf:inf",
        "роблю робити verb:imperf:pres:s:1",
        "робив робити verb:imperf:past:m",
        "дівка дівка noun:bad:v_rod",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect::<Vec<_>>()
}
