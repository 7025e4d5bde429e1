use chrono::Duration;
use log::debug;

use crate::domain::Subtitles;

/// Imports the subtitles of another document as translations.
///
/// When the translation has more subtitles, new ones are appended after the
/// last subtitle, `gap` apart, so every translated text has a home.
pub fn import(subtitles: &mut Subtitles, translation: &Subtitles, gap: Duration) {
    add_extra_subtitles(subtitles, translation, gap);

    for (original, translated) in subtitles
        .collection
        .iter_mut()
        .zip(translation.collection.iter())
    {
        original.translation_mut().set(&translated.text.get_plain(), "\n", false);
    }
    debug!("Imported {} translations", translation.collection.len());
}

/// Removes every translation
pub fn clear(subtitles: &mut Subtitles) {
    for subtitle in subtitles.collection.iter_mut() {
        subtitle.clear_translation();
    }
}

fn add_extra_subtitles(subtitles: &mut Subtitles, translation: &Subtitles, gap: Duration) {
    let translation_count = translation.collection.len();
    let subtitles_count = subtitles.collection.len();
    if translation_count <= subtitles_count {
        return;
    }

    let frame_rate = subtitles.frame_rate();
    if subtitles_count == 0 {
        subtitles.collection.add_new_at(0, frame_rate);
    }
    while subtitles.collection.len() < translation_count {
        let last = subtitles.collection.len() - 1;
        subtitles.collection.add_new_after(last, gap, frame_rate);
    }
}
