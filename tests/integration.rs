// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::{mouse, window, Point, Size};
use image_rs::{Rgba, RgbaImage};
use tempfile::tempdir;
use zoomview::config::{self, Config};
use zoomview::i18n::I18n;
use zoomview::media;
use zoomview::ui::viewer::component::{Message, State, CONTROLS_AREA_HEIGHT};

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

fn write_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    let image = RgbaImage::from_pixel(width, height, Rgba([0, 128, 255, 255]));
    image.save(&path).expect("failed to write temporary png");
    path
}

#[tokio::test]
async fn upload_flow_resets_zoom_state() {
    let dir = tempdir().expect("failed to create temp dir");
    let first = write_png(dir.path(), "first.png", 8, 8);
    let second = write_png(dir.path(), "second.png", 16, 4);

    let mut state = State::new();

    // First upload.
    let generation = state.begin_load();
    let result = media::load_image(&first).await;
    assert!(state.finish_load(generation, result));
    assert!(state.has_media());

    // Give the pane a 500x500 viewport and zoom in at a focal point.
    state.update(Message::RawEvent(iced::Event::Window(
        window::Event::Resized(Size::new(500.0, 500.0 + CONTROLS_AREA_HEIGHT)),
    )));
    state.update(Message::RawEvent(iced::Event::Mouse(
        mouse::Event::CursorMoved {
            position: Point::new(100.0, 400.0),
        },
    )));
    for _ in 0..12 {
        state.update(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            },
        )));
    }
    assert!(state.zoom().factor.value() > 2.9);
    assert!(state.scrollbars().visible_x);

    // Second upload resets the engine.
    let generation = state.begin_load();
    let result = media::load_image(&second).await;
    assert!(state.finish_load(generation, result));

    assert_abs_diff_eq!(state.zoom().factor.value(), 1.0);
    assert_abs_diff_eq!(state.zoom().anchor.x(), 0.5);
    assert_abs_diff_eq!(state.zoom().anchor.y(), 0.5);
    assert!(!state.scrollbars().visible_x);
    assert!(!state.scrollbars().visible_y);
}

#[tokio::test]
async fn overlapping_uploads_keep_the_latest() {
    let dir = tempdir().expect("failed to create temp dir");
    let slow = write_png(dir.path(), "slow.png", 8, 8);
    let fast = write_png(dir.path(), "fast.png", 16, 4);

    let mut state = State::new();

    // Two requests in flight; the first completes last.
    let stale_generation = state.begin_load();
    let current_generation = state.begin_load();

    let fast_result = media::load_image(&fast).await;
    assert!(state.finish_load(current_generation, fast_result));

    let slow_result = media::load_image(&slow).await;
    assert!(!state.finish_load(stale_generation, slow_result));
}

#[tokio::test]
async fn failed_upload_reports_without_clobbering_state() {
    let dir = tempdir().expect("failed to create temp dir");
    let good = write_png(dir.path(), "good.png", 8, 8);
    let bad = dir.path().join("bad.png");
    std::fs::write(&bad, b"definitely not a png").expect("write bad file");

    let mut state = State::new();

    let generation = state.begin_load();
    let result = media::load_image(&good).await;
    assert!(state.finish_load(generation, result));

    let generation = state.begin_load();
    let result = media::load_image(&bad).await;
    assert!(state.finish_load(generation, result));

    assert!(state.has_media());
    assert!(state.load_error().is_some());
    assert_abs_diff_eq!(state.zoom().factor.value(), 1.0);
}
