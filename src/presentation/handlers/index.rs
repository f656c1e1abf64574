use std::fmt::Write;

use axum::extract::State;
use axum::response::Html;

use crate::presentation::state::AppState;

pub const SUPPORTED_LOCALES: [(&str, &str); 14] = [
    ("en-US", "English (US)"),
    ("en-GB", "English (UK)"),
    ("es-ES", "Spanish"),
    ("fr-FR", "French"),
    ("de-DE", "German"),
    ("it-IT", "Italian"),
    ("pt-BR", "Portuguese (Brazil)"),
    ("ru-RU", "Russian"),
    ("ja-JP", "Japanese"),
    ("ko-KR", "Korean"),
    ("zh-CN", "Chinese (Simplified)"),
    ("ar-SA", "Arabic"),
    ("hi-IN", "Hindi"),
    ("ur-PK", "Urdu"),
];

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Speech-to-Text Service</title>
    <style>
        body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
        .section { margin-bottom: 30px; padding: 20px; border: 1px solid #ddd; border-radius: 5px; }
        .form-group { margin-bottom: 15px; }
        label { display: block; margin-bottom: 5px; font-weight: bold; }
        input, select { padding: 8px; width: 100%; box-sizing: border-box; }
        button { background-color: #4285f4; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; }
        code { background-color: #f4f4f4; padding: 2px 4px; border-radius: 3px; }
    </style>
</head>
<body>
    <h1>Speech-to-Text Service</h1>
"#;

fn language_select(default_language: &str) -> String {
    let mut html = String::from("<select id=\"language\" name=\"language\">\n");
    for (code, name) in SUPPORTED_LOCALES {
        let selected = if code == default_language {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "                        <option value=\"{code}\"{selected}>{name}</option>"
        );
    }
    html.push_str("                    </select>");
    html
}

pub fn render_index(default_language: &str) -> String {
    let select = language_select(default_language);
    format!(
        r#"{PAGE_HEAD}
    <div class="section">
        <h2>Upload Audio File</h2>
        <form action="/transcribe" method="post" enctype="multipart/form-data">
            <div class="form-group">
                <label for="audio_file">Audio File (WAV, MP3, FLAC):</label>
                <input type="file" id="audio_file" name="audio_file" accept="audio/*" required>
            </div>
            <div class="form-group">
                <label for="language">Language:</label>
                {select}
            </div>
            <button type="submit">Transcribe</button>
        </form>
    </div>

    <div class="section">
        <h2>Test with Sample Audio</h2>
        <form action="/test" method="post">
            <div class="form-group">
                <label for="test_language">Language:</label>
                {select}
            </div>
            <button type="submit">Run Test</button>
        </form>
    </div>

    <div class="section">
        <h2>API Endpoints</h2>
        <ul>
            <li><code>POST /transcribe</code> multipart upload with <code>audio_file</code> and optional <code>language</code></li>
            <li><code>POST /test</code> transcribe the built-in sample</li>
            <li><code>GET /health</code> service status</li>
        </ul>
    </div>
</body>
</html>
"#
    )
}

pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.default_language))
}
