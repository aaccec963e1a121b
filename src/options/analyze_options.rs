use crate::error;
use crate::features::Features;
use crate::transcoding;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[non_exhaustive]
pub struct AnalyzeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    pub(crate) features: Features,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) xpath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fallback_to_raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) return_analyzed_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) limit_text_characters: Option<u32>,
}

impl AnalyzeOptions {
    pub fn new(features: Features) -> Self {
        Self {
            text: None,
            html: None,
            url: None,
            features,
            clean: None,
            xpath: None,
            fallback_to_raw: None,
            return_analyzed_text: None,
            language: None,
            limit_text_characters: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = Some(clean);
        self
    }

    pub fn xpath(mut self, xpath: impl Into<String>) -> Self {
        self.xpath = Some(xpath.into());
        self
    }

    pub fn fallback_to_raw(mut self, fallback_to_raw: bool) -> Self {
        self.fallback_to_raw = Some(fallback_to_raw);
        self
    }

    pub fn return_analyzed_text(mut self, return_analyzed_text: bool) -> Self {
        self.return_analyzed_text = Some(return_analyzed_text);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn limit_text_characters(mut self, limit_text_characters: u32) -> Self {
        self.limit_text_characters = Some(limit_text_characters);
        self
    }

    // The service answers 400 for each of these; failing locally keeps the
    // bad request off the wire.
    pub fn validate(&self) -> error::Result<()> {
        let sources = [&self.text, &self.html, &self.url]
            .iter()
            .filter(|source| source.is_some())
            .count();

        if sources == 0 {
            return Err(error::Error::invalid_argument(
                "text",
                "one of text, html or url must be set",
            ));
        }
        if sources > 1 {
            return Err(error::Error::invalid_argument(
                "text",
                "text, html and url are mutually exclusive",
            ));
        }
        if self.features.requested().is_empty() {
            return Err(error::Error::invalid_argument(
                "features",
                "at least one analysis feature must be requested",
            ));
        }
        if let Some(0) = self.limit_text_characters {
            return Err(error::Error::invalid_argument(
                "limit_text_characters",
                "must be greater than zero",
            ));
        }

        Ok(())
    }

    pub fn to_json(&self) -> error::Result<Vec<u8>> {
        self.validate()?;
        transcoding::encode(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::features::{Features, KeywordsOptions, MetadataOptions};
    use crate::options::analyze_options::AnalyzeOptions;

    fn invalid_arg(result: crate::error::Result<()>) -> String {
        match result.unwrap_err().kind() {
            ErrorKind::InvalidArgument(kind) => kind.arg.clone().unwrap(),
            kind => panic!("expected invalid argument, got {kind:?}"),
        }
    }

    #[test]
    fn test_validate_requires_a_source() {
        let opts = AnalyzeOptions::new(Features::new().metadata(MetadataOptions::new()));

        assert_eq!("text", invalid_arg(opts.validate()));
    }

    #[test]
    fn test_validate_rejects_multiple_sources() {
        let opts = AnalyzeOptions::new(Features::new().metadata(MetadataOptions::new()))
            .text("IBM is an American multinational technology company.")
            .url("https://example.org/article");

        assert_eq!("text", invalid_arg(opts.validate()));
    }

    #[test]
    fn test_validate_requires_a_feature() {
        let opts = AnalyzeOptions::new(Features::new()).text("Hello world");

        assert_eq!("features", invalid_arg(opts.validate()));
    }

    #[test]
    fn test_validate_rejects_a_zero_character_limit() {
        let opts = AnalyzeOptions::new(Features::new().keywords(KeywordsOptions::new()))
            .text("Hello world")
            .limit_text_characters(0);

        assert_eq!("limit_text_characters", invalid_arg(opts.validate()));
    }

    #[test]
    fn test_validate_accepts_a_complete_request() {
        let opts = AnalyzeOptions::new(Features::new().keywords(KeywordsOptions::new().limit(3)))
            .url("https://example.org/article")
            .clean(false)
            .return_analyzed_text(true)
            .limit_text_characters(2048);

        opts.validate().unwrap();
    }
}
