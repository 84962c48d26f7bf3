use crate::models::{Catalog, ContentItem};

/// Static reference data: (id, title, link, category, tags)
const ITEMS: &[(u32, &str, &str, &str, &str)] = &[
    (
        1,
        "Deep Focus Beats",
        "https://www.youtube.com/watch?v=jfKfPfyJRdk",
        "Audio (Focus)",
        "Focus Concentration Study Lofi Productivity",
    ),
    (
        2,
        "Calming Ocean Waves",
        "https://www.youtube.com/watch?v=DWcJFNfaw9c",
        "Audio (Relaxation)",
        "Calm Relaxation Ocean Nature Soothing",
    ),
    (
        3,
        "5-Minute Guided Meditation",
        "https://www.youtube.com/watch?v=inpok4MKVLM",
        "Meditation",
        "Calm Breathing Mindfulness Peace Grounding",
    ),
    (
        4,
        "Motivational Speech",
        "https://www.youtube.com/watch?v=mgmVOuLgFB0",
        "Video (Motivation)",
        "Motivation Energy Uplifting Hope Confidence",
    ),
    (
        5,
        "Box Breathing for Anxiety",
        "https://www.youtube.com/watch?v=tEmt1Znux58",
        "Video (Breathing)",
        "Breathing Calm Relaxation Anxiety Relief",
    ),
    (
        6,
        "Sleep Story: Rainy Night Cabin",
        "https://www.youtube.com/watch?v=q76bMs-NwRk",
        "Audio (Sleep)",
        "Sleep Rest Soothing Rain Relaxation",
    ),
    (
        7,
        "Happy Morning Playlist",
        "https://www.youtube.com/watch?v=ZbZSe6N_BXs",
        "Audio (Mood Boost)",
        "Uplifting Joy Energy Happy Music",
    ),
    (
        8,
        "Pomodoro Study Session",
        "https://www.youtube.com/watch?v=mNBmG24djoY",
        "Video (Productivity)",
        "Study Productivity Focus Timer Concentration",
    ),
    (
        9,
        "Releasing Anger: Body Scan",
        "https://www.youtube.com/watch?v=QS2yDmWk0vs",
        "Meditation",
        "Release Grounding Peace Calm Body",
    ),
    (
        10,
        "How Gratitude Rewires Your Mood",
        "https://greatergood.berkeley.edu/article/item/how_gratitude_changes_you_and_your_brain",
        "Article",
        "Gratitude Hope Joy Reflection Uplifting",
    ),
    (
        11,
        "Yoga Nidra for Deep Rest",
        "https://www.youtube.com/watch?v=M0u9GST_j3s",
        "Audio (Sleep)",
        "Rest Sleep Relaxation Body Soothing",
    ),
    (
        12,
        "Why Walking Outside Clears Your Head",
        "https://www.health.harvard.edu/staying-healthy/walking-your-steps-to-health",
        "Article",
        "Nature Energy Focus Movement Grounding",
    ),
];

/// Loads the fixed content catalog
///
/// The catalog is static reference data: every call returns the same items.
pub fn load() -> Catalog {
    let items = ITEMS
        .iter()
        .map(|&(id, title, link, category, tags)| ContentItem::new(id, title, link, category, tags))
        .collect();
    // Ids in ITEMS are distinct, checked by test_ids_are_unique
    Catalog::new(items).unwrap_or_else(|e| unreachable!("static catalog is valid: {}", e))
}
