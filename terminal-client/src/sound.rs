use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Win,
}

fn bells(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Click => "\x07",
        SoundCue::Win => "\x07\x07\x07",
    }
}

/// Rings the terminal bell. Muted sessions stay silent.
pub fn play(cue: SoundCue, muted: bool) {
    if muted {
        return;
    }
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(bells(cue).as_bytes());
    let _ = stdout.flush();
}
