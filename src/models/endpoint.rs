use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI")]
    Ai,
    Downloader,
    Tools,
    Music,
    Search,
    Movie,
    Server,
}

impl Category {
    /// Canonical display order used by the documentation site navigation.
    pub const ALL: [Category; 7] = [
        Category::Ai,
        Category::Downloader,
        Category::Tools,
        Category::Music,
        Category::Search,
        Category::Movie,
        Category::Server,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::Downloader => "Downloader",
            Category::Tools => "Tools",
            Category::Music => "Music",
            Category::Search => "Search",
            Category::Movie => "Movie",
            Category::Server => "Server",
        }
    }

    pub fn parse(raw: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic tag for a parameter. Drives display formatting and sample
/// generation only, never runtime validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Array,
    Object,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub required: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub id: String,
    pub method: Method,
    pub path: String,
    pub title: String,
    pub category: Category,
    pub description: String,
    #[serde(rename = "params")]
    pub parameters: Vec<Parameter>,
    pub curl_example: String,
    pub js_example: String,
    #[serde(rename = "response")]
    pub sample_response: String,
}

impl Endpoint {
    pub fn has_file_param(&self) -> bool {
        self.parameters.iter().any(|p| p.kind == ParamKind::File)
    }

    /// Heading for the parameter table: query parameters for GET requests,
    /// form data when a file is uploaded, body parameters otherwise.
    pub fn parameter_section(&self) -> &'static str {
        if self.parameters.is_empty() {
            ""
        } else if self.method == Method::Get {
            "Query Parameters"
        } else if self.has_file_param() {
            "Form Data"
        } else {
            "Body Parameters"
        }
    }
}
