use super::domain::{RenderedView, Tone};
use super::formatters::{HtmlFormatter, ReportContext, TextFormatter};
use super::renderer::render;
use crate::modules::search::domain::Submission;
use crate::shared::domain::value_objects::Locale;
use crate::shared::errors::{AppError, AppResult};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// How results leave the process
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Print the submission and its view as JSON instead of text
    pub json: bool,
    /// Also write a standalone HTML report here
    pub html: Option<PathBuf>,
    pub color: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    submission: &'a Submission,
    view: &'a RenderedView,
}

#[derive(Serialize)]
struct JsonMessage<'a> {
    tone: Tone,
    text: &'a str,
}

/// Turns submissions and status messages into printable output
pub struct Presenter {
    options: OutputOptions,
    locale: Locale,
    text: TextFormatter,
    html: Option<HtmlFormatter>,
}

impl Presenter {
    pub fn new(options: OutputOptions, locale: Locale) -> AppResult<Self> {
        let html = match options.html {
            Some(_) => Some(HtmlFormatter::new()?),
            None => None,
        };

        Ok(Self {
            text: TextFormatter::new(options.color),
            options,
            locale,
            html,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render a submission for the terminal, writing the HTML report if asked
    pub fn present(&self, submission: &Submission) -> AppResult<String> {
        let view = render(&submission.result, self.locale);

        if let (Some(formatter), Some(path)) = (&self.html, &self.options.html) {
            let report = ReportContext::new(submission, &view, self.locale);
            std::fs::write(path, formatter.format(&report, &view)?)?;
            info!("HTML report written to {}", path.display());
        }

        if self.options.json {
            let output = JsonOutput {
                submission,
                view: &view,
            };
            return Ok(serde_json::to_string_pretty(&output)?);
        }

        Ok(self.text.format(&view))
    }

    pub fn success(&self, text: &str) -> String {
        self.message(Tone::Success, text)
    }

    pub fn notice(&self, text: &str) -> String {
        self.message(Tone::Notice, text)
    }

    pub fn error(&self, error: &AppError) -> String {
        self.message(Tone::Error, error.message())
    }

    fn message(&self, tone: Tone, text: &str) -> String {
        if self.options.json {
            let output = JsonMessage { tone, text };
            return serde_json::to_string(&output).unwrap_or_default();
        }
        self.text.message(tone, text)
    }
}
