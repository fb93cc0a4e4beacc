//! Static endpoint records for the documentation catalog. Data only; record
//! order here is the order the site presents.

use crate::models::{Category, Endpoint, Method, ParamKind, Parameter};

fn query(name: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        kind: ParamKind::String,
        required: true,
        description: format!("Query parameter {}", name),
    }
}

fn body(name: &str, kind: ParamKind) -> Parameter {
    Parameter {
        name: name.to_string(),
        kind,
        required: true,
        description: format!("Body parameter {}", name),
    }
}

fn form_file(name: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        kind: ParamKind::File,
        required: true,
        description: format!("Form data parameter {}", name),
    }
}

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        // AI
        Endpoint {
            id: "ai-gpt4".to_string(),
            method: Method::Post,
            path: "/ai/gpt4".to_string(),
            title: "GPT-4".to_string(),
            category: Category::Ai,
            description: "Access GPT-4 AI model for chat completion".to_string(),
            parameters: vec![body("messages", ParamKind::Array), body("user_id", ParamKind::String)],
            curl_example: r#"curl -X POST "https://host.optikl.ink/ai/gpt4" \
  -H "Content-Type: application/json" \
  -d '{
  "messages": [\
    {\
      "role": "system",\
      "content": "Good Person"\
    },\
    {\
      "role": "user",\
      "content": "hai"\
    }\
  ],
  "user_id": "1234"
}'"#
            .to_string(),
            js_example: r#"fetch('https://host.optikl.ink/ai/gpt4', {
  method: 'POST',
  headers: {
    'Content-Type': 'application/json'
  },
  body: JSON.stringify({
  "messages": [\
    {\
      "role": "system",\
      "content": "Good Person"\
    },\
    {\
      "role": "user",\
      "content": "hai"\
    }\
  ],
  "user_id": "1234"
})
})
.then(response => response.json())
.then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "ai-perplexity".to_string(),
            method: Method::Get,
            path: "/ai/perplexity".to_string(),
            title: "Perplexity".to_string(),
            category: Category::Ai,
            description: "Access Perplexity AI model for chat completion".to_string(),
            parameters: vec![query("prompt")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/ai/perplexity?prompt=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/ai/perplexity?prompt=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "{\n  \"response\": \"Prabowo Subianto\"\n}".to_string(),
        },
        Endpoint {
            id: "ai-storygenerator".to_string(),
            method: Method::Post,
            path: "/ai/storygenerator".to_string(),
            title: "Story Generator".to_string(),
            category: Category::Ai,
            description: "Create compelling short stories and novels with AI assistance.".to_string(),
            parameters: vec![
                body("text", ParamKind::String),
                body("client", ParamKind::String),
                body("mode", ParamKind::String),
                body("length", ParamKind::String),
                body("creative", ParamKind::String),
                body("language", ParamKind::String),
                body("syllable", ParamKind::Object),
            ],
            curl_example: r#"curl -X POST "https://host.optikl.ink/ai/storygenerator" \
  -H "Content-Type: application/json" \
  -d '{
  "text": "seks",
  "client": "client_name",
  "mode": "Young Adult",
  "length": "Novel",
  "creative": "High",
  "language": "id",
  "syllable": {"min": 2, "max": 4}
}'"#
            .to_string(),
            js_example: r#"fetch('https://host.optikl.ink/ai/storygenerator', {
  method: 'POST',
  headers: {
    'Content-Type': 'application/json'
  },
  body: JSON.stringify({
  "text": "seks",
  "client": "client_name",
  "mode": "Young Adult",
  "length": "Novel",
  "creative": "High",
  "language": "id",
  "syllable": {"min": 2, "max": 4}
})
})
.then(response => response.json())
.then(data => console.log(data))"#
                .to_string(),
            sample_response: "{\n  \"success\": true,\n  \"text\": \"story here\"\n}".to_string(),
        },
        // Downloader
        Endpoint {
            id: "dl-facebook".to_string(),
            method: Method::Get,
            path: "/download/facebook".to_string(),
            title: "Facebook Downloader".to_string(),
            category: Category::Downloader,
            description: "Facebook Video/Audio Downloader".to_string(),
            parameters: vec![query("url")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/download/facebook?url=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/download/facebook?url=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "dl-threads".to_string(),
            method: Method::Get,
            path: "/download/threads".to_string(),
            title: "Threads Downloader".to_string(),
            category: Category::Downloader,
            description: "Threads Video/Photo Downloader".to_string(),
            parameters: vec![query("url")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/download/threads?url=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/download/threads?url=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "dl-x".to_string(),
            method: Method::Get,
            path: "/download/x".to_string(),
            title: "X Downloader".to_string(),
            category: Category::Downloader,
            description: "X Video/Audio Downloader".to_string(),
            parameters: vec![query("url")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/download/x?url=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/download/x?url=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "dl-pinterest".to_string(),
            method: Method::Get,
            path: "/download/pinterest".to_string(),
            title: "Pinterest Downloader".to_string(),
            category: Category::Downloader,
            description: "Pinterest Video Downloader".to_string(),
            parameters: vec![query("url")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/download/pinterest?url=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/download/pinterest?url=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "dl-youtube".to_string(),
            method: Method::Get,
            path: "/download/youtube".to_string(),
            title: "YouTube Downloader".to_string(),
            category: Category::Downloader,
            description: "YouTube Video/Audio Downloader, (Available format: mp3, 144, 240, 360, 480, 720, 1080)"
                .to_string(),
            parameters: vec![query("url"), query("format")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/download/youtube?url=value&format=value""#
                .to_string(),
            js_example: r#"fetch('https://host.optikl.ink/download/youtube?url=value&format=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "dl-ytmp3".to_string(),
            method: Method::Post,
            path: "/download/ytmp3".to_string(),
            title: "YouTube Audio Downloader".to_string(),
            category: Category::Downloader,
            description: "Download YouTube audio".to_string(),
            parameters: vec![body("url", ParamKind::String)],
            curl_example: r#"curl -X POST "https://host.optikl.ink/download/ytmp3" \
  -H "Content-Type: application/json" \
  -d '{
  "url": "https://youtu.be/PsKItQNwjrM?si=vrWRZ3EBjf9cesrd"
}'"#
            .to_string(),
            js_example: r#"fetch('https://host.optikl.ink/download/ytmp3', {
  method: 'POST',
  headers: {
    'Content-Type': 'application/json'
  },
  body: JSON.stringify({
  "url": "https://youtu.be/PsKItQNwjrM?si=vrWRZ3EBjf9cesrd"
})
})
.then(response => response.json())
.then(data => console.log(data))"#
                .to_string(),
            sample_response: "{\n  \"url\": \"link download\"\n}".to_string(),
        },
        Endpoint {
            id: "dl-mediafire".to_string(),
            method: Method::Get,
            path: "/download/mediafire".to_string(),
            title: "MediaFire Downloader".to_string(),
            category: Category::Downloader,
            description: "MediaFire Downloader".to_string(),
            parameters: vec![query("url")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/download/mediafire?url=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/download/mediafire?url=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: r#"{
  "success": true,
  "data": {
    "download_url": "https://example.com",
    "filename": "example",
    "filesize": "1MB",
    "filetype": "ZIP",
    "upload_date": "2024-12-10 13:41:44",
    "source_url": "https://www.mediafire.com/file/1iu7hqs377e96uf/qioV19(Beal).zip"
  }
}"#
            .to_string(),
        },
        // Tools
        Endpoint {
            id: "tool-translate".to_string(),
            method: Method::Get,
            path: "/tools/translate".to_string(),
            title: "Translator".to_string(),
            category: Category::Tools,
            description: "Translate any text you want".to_string(),
            parameters: vec![query("text"), query("to")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/tools/translate?text=value&to=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/tools/translate?text=value&to=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "tool-upload".to_string(),
            method: Method::Post,
            path: "/file/upload".to_string(),
            title: "Uploader".to_string(),
            category: Category::Tools,
            description: "Upload file to url with ease".to_string(),
            parameters: vec![form_file("file")],
            curl_example: r#"curl -X POST "https://host.optikl.ink/file/upload" \
  -F "file=@/path/to/file""#
                .to_string(),
            js_example: r#"const formData = new FormData();
formData.append('file', fileInput.files[0]);

fetch('https://host.optikl.ink/file/upload', {
  method: 'POST',
  body: formData
})
.then(response => response.json())
.then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "tool-upscale".to_string(),
            method: Method::Post,
            path: "/tools/upscaling".to_string(),
            title: "Image Upscaling 2k".to_string(),
            category: Category::Tools,
            description: "Upscale and enhance image quality from a file without requiring API keys. The processed image is uploaded to a remote storage and the URL is returned."
                .to_string(),
            parameters: vec![form_file("file")],
            curl_example: r#"curl -X POST "https://host.optikl.ink/tools/upscaling" \
  -F "file=@/path/to/file""#
                .to_string(),
            js_example: r#"const formData = new FormData();
formData.append('file', fileInput.files[0]);

fetch('https://host.optikl.ink/tools/upscaling', {
  method: 'POST',
  body: formData
})
.then(response => response.json())
.then(data => console.log(data))"#
                .to_string(),
            sample_response: "{\n  \"success\": true,\n  \"data\": {\n    \"url\": \"https://cdn.botzaku.eu.org/example\"\n  }\n}"
                .to_string(),
        },
        Endpoint {
            id: "tool-subfinder".to_string(),
            method: Method::Get,
            path: "/tools/subfinder".to_string(),
            title: "Sub Domain Finder".to_string(),
            category: Category::Tools,
            description: "Look for sub domains from the main domain".to_string(),
            parameters: vec![query("domain")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/tools/subfinder?domain=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/tools/subfinder?domain=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "tool-domain-info".to_string(),
            method: Method::Get,
            path: "/tools/domain-info".to_string(),
            title: "Domain Information".to_string(),
            category: Category::Tools,
            description: "Domain and sub domain information".to_string(),
            parameters: vec![query("domain")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/tools/domain-info?domain=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/tools/domain-info?domain=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "tool-check-host".to_string(),
            method: Method::Get,
            path: "/tools/check-host".to_string(),
            title: "Check Host".to_string(),
            category: Category::Tools,
            description: "Check Host Domain, Available types: (ping, http, tcp, udp, dns, info)".to_string(),
            parameters: vec![query("host"), query("type")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/tools/check-host?host=value&type=value""#
                .to_string(),
            js_example: r#"fetch('https://host.optikl.ink/tools/check-host?host=value&type=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "tool-tempmail-create".to_string(),
            method: Method::Get,
            path: "/tools/tempmail".to_string(),
            title: "Tempmail Create".to_string(),
            category: Category::Tools,
            description: "Create a temporary email".to_string(),
            parameters: vec![query("action")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/tools/tempmail?action=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/tools/tempmail?action=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "tool-tempmail-check".to_string(),
            method: Method::Get,
            path: "/tools/tempmail".to_string(),
            title: "Check Inbox Tempmail".to_string(),
            category: Category::Tools,
            description: "Check your temporary email inbox".to_string(),
            parameters: vec![query("action"), query("token")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/tools/tempmail?action=value&token=value""#
                .to_string(),
            js_example: r#"fetch('https://host.optikl.ink/tools/tempmail?action=value&token=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "whatsapp-otp".to_string(),
            method: Method::Get,
            path: "/whatsapp/otp".to_string(),
            title: "OTP Verification WhatsApp".to_string(),
            category: Category::Tools,
            description: "Verify that the WhatsApp number is active and belongs to the user.".to_string(),
            parameters: vec![query("number")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/whatsapp/otp?number=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/whatsapp/otp?number=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: r#"{
  "success": true,
  "message": "OTP successfully sent to WhatsApp",
  "data": {
    "entry": {
      "number": "6281234567890",
      "status": "completed",
      "check": false,
      "active": true,
      "otp": "123456",
      "createdAt": 1765136356018,
      "updatedAt": 1765138137880,
      "lastOtpAt": 1765138132966,
      "ip": "172.9.151.2"
    }
  }
}"#
            .to_string(),
        },
        Endpoint {
            id: "data-data".to_string(),
            method: Method::Get,
            path: "/data/data".to_string(),
            title: "Api Path".to_string(),
            category: Category::Tools,
            description: "Bruh...".to_string(),
            parameters: vec![],
            curl_example: r#"curl -X GET "https://host.optikl.ink/data/data""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/data/data')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        // Music
        Endpoint {
            id: "soundcloud-search".to_string(),
            method: Method::Get,
            path: "/soundcloud/search".to_string(),
            title: "Soundcloud Track Search".to_string(),
            category: Category::Music,
            description: "Find your favorite songs on SoundCloud".to_string(),
            parameters: vec![query("query")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/soundcloud/search?query=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/soundcloud/search?query=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "soundcloud-download".to_string(),
            method: Method::Get,
            path: "/soundcloud/download".to_string(),
            title: "Soundcloud Track Downloader".to_string(),
            category: Category::Music,
            description: "Download your favorite songs on SoundCloud".to_string(),
            parameters: vec![query("url")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/soundcloud/download?url=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/soundcloud/download?url=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        // Search
        Endpoint {
            id: "search-pinterest".to_string(),
            method: Method::Post,
            path: "/search/pinterest".to_string(),
            title: "Pinterest Lens".to_string(),
            category: Category::Search,
            description: "Search pinterest image with pinterest lens".to_string(),
            parameters: vec![form_file("image")],
            curl_example: r#"curl -X POST "https://host.optikl.ink/search/pinterest" \
  -F "image=@/path/to/file""#
                .to_string(),
            js_example: r#"const formData = new FormData();
formData.append('image', fileInput.files[0]);

fetch('https://host.optikl.ink/search/pinterest', {
  method: 'POST',
  body: formData
})
.then(response => response.json())
.then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        // Movie
        Endpoint {
            id: "movie-popular".to_string(),
            method: Method::Get,
            path: "/movie/popular".to_string(),
            title: "Popular Movies".to_string(),
            category: Category::Movie,
            description: "Popular Movies List.\nThumbnail use: https://image.tmdb.org/t/p/w500${poster_path}"
                .to_string(),
            parameters: vec![query("page")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/popular?page=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/popular?page=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "movie-trending".to_string(),
            method: Method::Get,
            path: "/movie/trending".to_string(),
            title: "Trending Movies".to_string(),
            category: Category::Movie,
            description: "Trending movies list.\nThumbnail use: https://image.tmdb.org/t/p/w500${poster_path}"
                .to_string(),
            parameters: vec![query("page")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/trending?page=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/trending?page=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "movie-top-rated".to_string(),
            method: Method::Get,
            path: "/movie/top-rated".to_string(),
            title: "Top Rated Movies".to_string(),
            category: Category::Movie,
            description: "Top Rated Movies List.\nThumbnail use: https://image.tmdb.org/t/p/w500${poster_path}"
                .to_string(),
            parameters: vec![query("page")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/top-rated?page=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/top-rated?page=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "movie-upcoming".to_string(),
            method: Method::Get,
            path: "/movie/upcoming".to_string(),
            title: "Upcoming Movies".to_string(),
            category: Category::Movie,
            description: "Upcoming Movies List.\nThumbnail use: https://image.tmdb.org/t/p/w500${poster_path}"
                .to_string(),
            parameters: vec![query("page")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/upcoming?page=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/upcoming?page=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "movie-search".to_string(),
            method: Method::Get,
            path: "/movie/search".to_string(),
            title: "Search Movies".to_string(),
            category: Category::Movie,
            description: "Search Movies Using Query Text.\nThumbnail use: https://image.tmdb.org/t/p/w500${poster_path}"
                .to_string(),
            parameters: vec![query("query"), query("page")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/search?query=value&page=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/search?query=value&page=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "movie-list".to_string(),
            method: Method::Get,
            path: "/movie/list".to_string(),
            title: "List Movies".to_string(),
            category: Category::Movie,
            description: "List All Movies.\nThumbnail use: https://image.tmdb.org/t/p/w500${poster_path}".to_string(),
            parameters: vec![query("page")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/list?page=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/list?page=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "movie-genres".to_string(),
            method: Method::Get,
            path: "/movie/genres".to_string(),
            title: "Genre Movies".to_string(),
            category: Category::Movie,
            description: "Genre Movies List.".to_string(),
            parameters: vec![],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/genres""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/genres')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "movie-detail".to_string(),
            method: Method::Get,
            path: "/movie/detail".to_string(),
            title: "Movie Details".to_string(),
            category: Category::Movie,
            description: "Movie Details Use Id.\nThumbnail use: https://image.tmdb.org/t/p/w500${poster_path}"
                .to_string(),
            parameters: vec![query("movieId")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/detail?movieId=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/detail?movieId=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "movie-credits".to_string(),
            method: Method::Get,
            path: "/movie/credits".to_string(),
            title: "Credits Movies".to_string(),
            category: Category::Movie,
            description: "Credits Movies Use Id.\nThumbnail use: https://image.tmdb.org/t/p/w500${profile_path}"
                .to_string(),
            parameters: vec![query("movieId")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/credits?movieId=value""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/credits?movieId=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        Endpoint {
            id: "movie-recommended".to_string(),
            method: Method::Get,
            path: "/movie/recommended".to_string(),
            title: "Recommended Movies".to_string(),
            category: Category::Movie,
            description: "Recommended Movies List.\nThumbnail use: https://image.tmdb.org/t/p/w500${poster_path}"
                .to_string(),
            parameters: vec![query("movieId"), query("page")],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/recommended?movieId=value&page=value""#
                .to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/recommended?movieId=value&page=value')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
        // Server
        Endpoint {
            id: "movie-server".to_string(),
            method: Method::Get,
            path: "/movie/server".to_string(),
            title: "Server Movies".to_string(),
            category: Category::Server,
            description: "Server for embedding movie videos.\nUse imdb_id example: https://vidsrc.vip/embed/movie/${imdb_id}"
                .to_string(),
            parameters: vec![],
            curl_example: r#"curl -X GET "https://host.optikl.ink/movie/server""#.to_string(),
            js_example: r#"fetch('https://host.optikl.ink/movie/server')
  .then(response => response.json())
  .then(data => console.log(data))"#
                .to_string(),
            sample_response: "[]".to_string(),
        },
    ]
}
