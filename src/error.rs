// src/error.rs

/// Everything that can abort a scrape run.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("no `var {0} = …` declaration found in any script block")]
    NoData(&'static str),

    #[error("malformed script source: {0}")]
    ScriptParse(String),

    #[error("unsupported literal shape: {0}")]
    MalformedLiteral(String),

    #[error("missing trailing clock time in {0:?}")]
    MalformedTimestamp(String),
}
