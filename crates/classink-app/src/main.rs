//! Native demo driver: runs one scripted lesson against a real backend.

use classink_core::storage::{
    FileStorage, MemoryStorage, Storage, StorageError, DEFAULT_PROFILE_KEY,
};
use classink_core::{
    BackgroundStyle, CannedSuggestions, ItemKind, LessonSession, PointerSource, SuggestionRequest,
    SurfaceFrame, ToolKind, UserProfile, suggest_or_fallback,
};
use kurbo::Point;

fn open_storage() -> Box<dyn Storage> {
    if std::env::args().any(|a| a == "--memory") {
        log::info!("using in-memory storage");
        return Box::new(MemoryStorage::new());
    }
    match FileStorage::default_location() {
        Ok(storage) => {
            log::info!("storing profiles under {}", storage.base_path().display());
            Box::new(storage)
        }
        Err(e) => {
            log::warn!("file storage unavailable ({e}), falling back to memory");
            Box::new(MemoryStorage::new())
        }
    }
}

async fn run() {
    let storage = open_storage();

    let mut profile = match storage.load(DEFAULT_PROFILE_KEY).await {
        Ok(profile) => profile,
        Err(StorageError::NotFound(_)) => {
            log::info!("no saved profile, starting fresh");
            UserProfile::new()
        }
        Err(e) => {
            log::warn!("could not load profile ({e}), starting fresh");
            UserProfile::new()
        }
    };

    let mut session = LessonSession::new("science", 640, 480);
    // Surface sits below a 40px toolbar in the demo window.
    session.set_frame(SurfaceFrame::new(Point::new(0.0, 40.0)));
    session.set_background(BackgroundStyle::Lined);

    session.add_item("Photosynthesis", ItemKind::Text);
    session.add_item("🌱", ItemKind::Emoji);
    session.drop_item("☀️", ItemKind::Sticker, PointerSource::Mouse { x: 320.0, y: 80.0 });

    // Circle the sun with the marker, underline with the highlighter.
    session.set_tool(ToolKind::Marker);
    session.pointer_down(PointerSource::Mouse { x: 300.0, y: 60.0 });
    session.pointer_move(PointerSource::Mouse { x: 340.0, y: 60.0 });
    session.pointer_move(PointerSource::Mouse { x: 340.0, y: 100.0 });
    session.pointer_move(PointerSource::Mouse { x: 300.0, y: 100.0 });
    session.pointer_move(PointerSource::Mouse { x: 300.0, y: 60.0 });
    session.pointer_up();

    session.set_tool(ToolKind::Highlighter);
    session.pointer_down(PointerSource::Mouse { x: 100.0, y: 200.0 });
    session.pointer_move(PointerSource::Mouse { x: 400.0, y: 200.0 });
    session.pointer_up();

    match session.save_into("Photosynthesis intro", &mut profile) {
        Ok(Some(id)) => println!("Saved whiteboard {id}"),
        Ok(None) => println!("Save skipped (no name)"),
        Err(e) => log::error!("save failed: {e}"),
    }

    // The in-memory profile stands even when the write fails.
    if let Err(e) = storage.save(DEFAULT_PROFILE_KEY, &profile).await {
        log::error!("could not persist profile: {e}");
    }

    if let Some(design) = profile.design(session.subject()) {
        println!("History for {}:", session.subject());
        for board in &design.whiteboards {
            println!("  [{}] {} ({} items)", board.timestamp, board.name, board.items.len());
        }
    }

    let provider = CannedSuggestions::default();
    let request = SuggestionRequest::new("photosynthesis", session.board.items().to_vec());
    println!("Suggestion: {}", suggest_or_fallback(&provider, &request).await);
}

fn main() {
    env_logger::init();
    log::info!("Starting ClassInk");

    pollster::block_on(run());
}
