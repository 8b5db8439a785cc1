use anyhow::Result;
use murmur::config::AppConfig;
use murmur::controller::Controller;
use murmur::notes::NoteRegistry;
use murmur::session::{Player, Recorder};
use murmur::storage::FileKeyValueStore;
use murmur::ui::MurmurApp;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "murmur=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Murmur voice notes");

    let config = AppConfig::default();
    info!("Data directory: {}", config.data_dir.display());
    let controller = build_controller(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Murmur"),
        ..Default::default()
    };

    eframe::run_native(
        "Murmur",
        options,
        Box::new(move |cc| Ok(Box::new(MurmurApp::new(cc, controller)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run UI: {e}"))
}

#[cfg(feature = "audio-io")]
fn build_controller(config: &AppConfig) -> Controller {
    use murmur::audio::{CpalCaptureDevice, CpalMicrophone, RodioPlayerDevice};
    use murmur::storage::FsBlobStore;

    let registry = NoteRegistry::load(Box::new(FileKeyValueStore::new(config.store_dir())));
    let recorder = Recorder::new(
        Box::new(CpalMicrophone),
        Box::new(CpalCaptureDevice::new()),
        config.preset.clone(),
    );
    let player = Player::new(Box::new(RodioPlayerDevice::new()));
    Controller::new(
        registry,
        recorder,
        player,
        Box::new(FsBlobStore::new(config.recordings_dir())),
    )
}

#[cfg(not(feature = "audio-io"))]
fn build_controller(config: &AppConfig) -> Controller {
    use murmur::audio::{DeniedMicrophone, UnsupportedCaptureDevice, UnsupportedPlayerDevice};
    use murmur::storage::NullBlobStore;

    // No audio support: notes remain listable/renameable, but capture,
    // playback, and blob deletion all report unsupported.
    let registry = NoteRegistry::load(Box::new(FileKeyValueStore::new(config.store_dir())));
    let recorder = Recorder::new(
        Box::new(DeniedMicrophone),
        Box::new(UnsupportedCaptureDevice),
        config.preset.clone(),
    );
    let player = Player::new(Box::new(UnsupportedPlayerDevice));
    Controller::new(registry, recorder, player, Box::new(NullBlobStore))
}
