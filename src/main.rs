use anyhow::Result;
use floatcam::app::FloatCam;
use floatcam::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use floatcam::settings::Settings;
use gpui::*;
use gpui_component::Root;
use gpui_component::theme::{Theme, ThemeMode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("floatcam=info")),
        )
        .init();

    let settings = Settings::load();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting floatcam"
    );

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);
        Theme::change(ThemeMode::Dark, None, cx);

        let bounds = Bounds::centered(None, size(px(WINDOW_WIDTH), px(WINDOW_HEIGHT)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(WINDOW_TITLE.into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| FloatCam::new(settings, cx));
            cx.new(|cx| Root::new(AnyView::from(view), window, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
