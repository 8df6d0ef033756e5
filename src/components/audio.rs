//! Temple bell and background music.
//!
//! Both play through `<audio>` elements in the webview; playback can be
//! refused by the autoplay policy, which is logged and otherwise ignored.

use dioxus::prelude::*;
use shinpyu_core::media::BELL_VOLUME;
use shinpyu_core::MusicPlan;

/// Element id of the page-turn bell.
pub const BELL_ID: &str = "temple-bell";

/// Element id of the background music player.
pub const MUSIC_ID: &str = "bgMusic";

const BELL_SRC: &str = "./assets/audio/temple-bell.mp3";

/// Rewind and ring the bell.
pub fn play_temple_bell() {
    run_script("temple bell", bell_script());
}

/// Attach the music source on first interaction and start playback.
pub fn start_background_music(plan: &MusicPlan) {
    tracing::info!(file = %plan.file, "Starting background music");
    run_script("background music", music_script(plan));
}

/// Evaluate a script in the webview, logging it if the script fails.
fn run_script(what: &'static str, script: String) {
    let eval = document::eval(&script);
    spawn(async move {
        if let Err(e) = eval.await {
            tracing::debug!("Failed to run {} script: {:?}", what, e);
        }
    });
}

fn bell_script() -> String {
    format!(
        r#"
        const bell = document.getElementById("{BELL_ID}");
        if (bell) {{
            bell.currentTime = 0;
            bell.volume = {BELL_VOLUME};
            bell.play().catch((err) => console.log("Audio playback prevented:", err));
        }}
        "#
    )
}

fn music_script(plan: &MusicPlan) -> String {
    // JSON string literal doubles as a safely quoted JS string
    let file = serde_json::Value::String(plan.file.clone()).to_string();
    format!(
        r#"
        const music = document.getElementById("{MUSIC_ID}");
        if (music) {{
            if (!music.src) {{
                music.src = {file};
                music.volume = {volume};
                music.loop = {looping};
            }}
            music.play().catch((err) => console.log("Background music autoplay prevented:", err.message));
        }}
        "#,
        volume = plan.volume,
        looping = plan.looping,
    )
}

/// Hidden audio elements used by the book.
#[component]
pub fn BookAudio() -> Element {
    rsx! {
        audio { id: BELL_ID, src: BELL_SRC, preload: "auto" }
        audio { id: MUSIC_ID, preload: "none" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_script_targets_bell() {
        let script = bell_script();
        assert!(script.contains(r#"getElementById("temple-bell")"#));
        assert!(script.contains("bell.volume = 0.3;"));
    }

    #[test]
    fn music_script_quotes_file() {
        let plan = MusicPlan {
            file: r#"./assets/audio/"quoted".mp3"#.to_string(),
            volume: 0.4,
            looping: false,
        };
        let script = music_script(&plan);
        assert!(script.contains(r#"music.src = "./assets/audio/\"quoted\".mp3";"#));
        assert!(script.contains("music.volume = 0.4;"));
        assert!(script.contains("music.loop = false;"));
    }
}
