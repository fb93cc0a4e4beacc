use serde_json::{Map, Value};

use crate::catalog::API_HOST;
use crate::models::{Endpoint, Method};

/// Target languages for example code. curl and JavaScript examples are
/// authored per endpoint; Python and Java are synthesized on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Curl,
    JavaScript,
    Python,
    Java,
}

impl Language {
    pub fn parse(raw: &str) -> Option<Language> {
        match raw {
            "curl" => Some(Language::Curl),
            "javascript" => Some(Language::JavaScript),
            "python" => Some(Language::Python),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Curl => "curl",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
        }
    }
}

/// Returns example client code for one endpoint in the requested language.
/// Pure: no I/O, same inputs always produce the same snippet.
pub fn sample(endpoint: &Endpoint, language: Language) -> String {
    match language {
        Language::Curl => endpoint.curl_example.clone(),
        Language::JavaScript => endpoint.js_example.clone(),
        Language::Python => python_sample(endpoint),
        Language::Java => java_sample(endpoint),
    }
}

/// Flat sample payload: every parameter name mapped to the placeholder
/// "value", in parameter order.
fn body_object(endpoint: &Endpoint) -> Value {
    let mut map = Map::new();
    for param in &endpoint.parameters {
        map.insert(param.name.clone(), Value::String("value".to_string()));
    }
    Value::Object(map)
}

fn python_sample(endpoint: &Endpoint) -> String {
    if endpoint.method == Method::Get {
        let pairs: Vec<String> = endpoint
            .parameters
            .iter()
            .map(|p| format!("'{}': 'value'", p.name))
            .collect();
        format!(
            r#"import requests

params = {{{pairs}}}
response = requests.get('{host}{path}', params=params)
print(response.json())"#,
            pairs = pairs.join(", "),
            host = API_HOST,
            path = endpoint.path,
        )
    } else if endpoint.has_file_param() {
        // File uploads post exactly one file; the remaining parameters are
        // intentionally left out of the generated sample.
        format!(
            r#"import requests

files = {{'file': open('/path/to/file', 'rb')}}
response = requests.post('{host}{path}', files=files)
print(response.json())"#,
            host = API_HOST,
            path = endpoint.path,
        )
    } else {
        let data = serde_json::to_string_pretty(&body_object(endpoint)).expect("serialize sample payload");
        format!(
            r#"import requests
import json

data = {data}
response = requests.post('{host}{path}', json=data)
print(response.json())"#,
            host = API_HOST,
            path = endpoint.path,
        )
    }
}

fn java_sample(endpoint: &Endpoint) -> String {
    if endpoint.method == Method::Get {
        let pairs: Vec<String> = endpoint.parameters.iter().map(|p| format!("{}=value", p.name)).collect();
        let uri = if pairs.is_empty() {
            format!("{}{}", API_HOST, endpoint.path)
        } else {
            format!("{}{}?{}", API_HOST, endpoint.path, pairs.join("&"))
        };
        format!(
            r#"import java.net.http.HttpClient;
import java.net.http.HttpRequest;
import java.net.http.HttpResponse;
import java.net.URI;

HttpClient client = HttpClient.newHttpClient();
HttpRequest request = HttpRequest.newBuilder()
    .uri(URI.create("{uri}"))
    .GET()
    .build();

HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());
System.out.println(response.body());"#,
        )
    } else if endpoint.has_file_param() {
        format!(
            r#"import java.net.http.HttpClient;
import java.net.http.HttpRequest;
import java.net.http.HttpResponse;
import java.nio.file.Files;
import java.nio.file.Paths;

HttpClient client = HttpClient.newHttpClient();
HttpRequest request = HttpRequest.newBuilder()
    .uri(URI.create("{host}{path}"))
    .POST(HttpRequest.BodyPublishers.ofFile(Paths.get("/path/to/file")))
    .build();

HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());
System.out.println(response.body());"#,
            host = API_HOST,
            path = endpoint.path,
        )
    } else {
        let json = serde_json::to_string(&body_object(endpoint))
            .expect("serialize sample payload")
            .replace('"', "\\\"");
        format!(
            r#"import java.net.http.HttpClient;
import java.net.http.HttpRequest;
import java.net.http.HttpResponse;

HttpClient client = HttpClient.newHttpClient();
String json = "{json}";

HttpRequest request = HttpRequest.newBuilder()
    .uri(URI.create("{host}{path}"))
    .header("Content-Type", "application/json")
    .POST(HttpRequest.BodyPublishers.ofString(json))
    .build();

HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());
System.out.println(response.body());"#,
            host = API_HOST,
            path = endpoint.path,
        )
    }
}
