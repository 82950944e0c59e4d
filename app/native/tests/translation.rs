//! Integration tests for the wallpaper translation layer.
//!
//! A recording backend stands in for the native service so the raw values
//! crossing the boundary can be asserted exactly.

use std::cell::RefCell;

use desktop_wallpaper::wallpaper::{RawWallpaperOptions, RawWallpaperRequest};
use desktop_wallpaper::{
    BackendError, DesktopImageOptions, DesktopWallpaper, DisplayId, FillColor, ImageScaling,
    WallpaperBackend, WallpaperError,
};

/// Owned copy of a [`RawWallpaperRequest`].
#[derive(Debug, Clone, PartialEq)]
struct RecordedSet {
    display: u32,
    path: String,
    scaling: i32,
    allow_clipping: i32,
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

#[derive(Default)]
struct RecordingBackend {
    options: RawWallpaperOptions,
    set_result: String,
    option_reads: RefCell<Vec<DisplayId>>,
    sets: RefCell<Vec<RecordedSet>>,
}

impl WallpaperBackend for RecordingBackend {
    fn set_wallpaper(&self, request: &RawWallpaperRequest<'_>) -> String {
        self.sets.borrow_mut().push(RecordedSet {
            display: request.display.get(),
            path: request.path.to_string(),
            scaling: request.scaling,
            allow_clipping: request.allow_clipping,
            red: request.red,
            green: request.green,
            blue: request.blue,
            alpha: request.alpha,
        });
        self.set_result.clone()
    }

    fn wallpaper_path_for_screen(&self, display: DisplayId) -> Result<String, BackendError> {
        Err(BackendError::new(format!("no screen {display}")))
    }

    fn wallpaper_options_for_screen(&self, display: DisplayId) -> RawWallpaperOptions {
        self.option_reads.borrow_mut().push(display);
        self.options
    }

    fn name(&self) -> &'static str { "recording" }
}

fn raw(scaling: i32, allow_clipping: i32) -> RawWallpaperOptions {
    RawWallpaperOptions {
        scaling: Some(scaling),
        allow_clipping: Some(allow_clipping),
        red: Some(0.2),
        green: Some(0.4),
        blue: Some(0.6),
        alpha: Some(0.8),
    }
}

#[test]
fn set_with_explicit_options_sends_exact_raw_values() {
    let wallpaper = DesktopWallpaper::new(RecordingBackend::default());
    let options = DesktopImageOptions {
        image_scaling: ImageScaling::ProportionallyUpOrDown,
        allow_clipping: true,
        desktop_fill_color: FillColor::new(255, 0, 0, 1.0),
    };

    wallpaper.set_wallpaper(DisplayId::new(1), "/tmp/a.png", Some(&options)).unwrap();

    let backend = wallpaper.backend();
    assert!(backend.option_reads.borrow().is_empty());
    assert_eq!(backend.sets.borrow().as_slice(), &[RecordedSet {
        display: 1,
        path: "/tmp/a.png".to_string(),
        scaling: -1,
        allow_clipping: 0,
        red: 1.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    }]);
}

#[test]
fn set_without_options_reads_then_reuses_current_options() {
    let wallpaper = DesktopWallpaper::new(RecordingBackend {
        options: raw(1, 1),
        ..Default::default()
    });
    let display = DisplayId::new(69_733_632);

    wallpaper.set_wallpaper(display, "/tmp/b.heic", None).unwrap();

    let backend = wallpaper.backend();
    assert_eq!(backend.option_reads.borrow().as_slice(), &[display]);

    let sets = backend.sets.borrow();
    let set = &sets[0];
    assert_eq!((set.display, set.scaling, set.allow_clipping), (69_733_632, 1, 1));
    // Channels pass through 8-bit quantization: 0.2 * 255 = 51.
    assert!((set.red - 51.0 / 255.0).abs() < 1e-12);
    assert!((set.green - 102.0 / 255.0).abs() < 1e-12);
    assert!((set.blue - 153.0 / 255.0).abs() < 1e-12);
    assert!((set.alpha - 0.8).abs() < f64::EPSILON);
}

#[test]
fn options_read_then_written_round_trip_through_backend() {
    let wallpaper = DesktopWallpaper::new(RecordingBackend {
        options: raw(-1, 0),
        ..Default::default()
    });
    let display = DisplayId::new(2);

    let options = wallpaper.wallpaper_options_for_screen(display).unwrap();
    assert_eq!(options.image_scaling, ImageScaling::ProportionallyUpOrDown);
    assert!(options.allow_clipping);
    assert_eq!(options.desktop_fill_color, FillColor::new(51, 102, 153, 0.8));

    wallpaper.set_wallpaper(display, "/tmp/c.png", Some(&options)).unwrap();
    let sets = wallpaper.backend().sets.borrow();
    assert_eq!((sets[0].scaling, sets[0].allow_clipping), (-1, 0));
}

#[test]
fn legacy_clipping_value_decodes_like_one() {
    for raw_clipping in [1, -1] {
        let wallpaper = DesktopWallpaper::new(RecordingBackend {
            options: raw(2, raw_clipping),
            ..Default::default()
        });
        let options = wallpaper.wallpaper_options_for_screen(DisplayId::new(1)).unwrap();
        assert!(!options.allow_clipping, "raw clipping {raw_clipping}");
    }
}

#[test]
fn all_absent_fields_mean_invalid_display() {
    let wallpaper = DesktopWallpaper::new(RecordingBackend::default());
    let err = wallpaper.wallpaper_options_for_screen(DisplayId::new(404)).unwrap_err();
    assert!(matches!(err, WallpaperError::InvalidDisplay(d) if d.get() == 404));
}

#[test]
fn any_present_field_is_never_invalid_display() {
    let single_field = [
        RawWallpaperOptions { scaling: Some(1), ..Default::default() },
        RawWallpaperOptions { allow_clipping: Some(0), ..Default::default() },
        RawWallpaperOptions { red: Some(0.0), ..Default::default() },
        RawWallpaperOptions { green: Some(0.0), ..Default::default() },
        RawWallpaperOptions { blue: Some(0.0), ..Default::default() },
        RawWallpaperOptions { alpha: Some(0.0), ..Default::default() },
    ];

    for options in single_field {
        let wallpaper = DesktopWallpaper::new(RecordingBackend { options, ..Default::default() });
        let err = wallpaper.wallpaper_options_for_screen(DisplayId::new(1)).unwrap_err();
        assert!(matches!(err, WallpaperError::IncompleteOptions { .. }), "{options:?}");
    }
}

#[test]
fn empty_set_result_is_success_and_non_empty_is_error() {
    let ok = DesktopWallpaper::new(RecordingBackend { options: raw(1, 0), ..Default::default() });
    assert!(ok.set_wallpaper(DisplayId::new(1), "/tmp/a.png", None).is_ok());

    let failing = DesktopWallpaper::new(RecordingBackend {
        options: raw(1, 0),
        set_result: "disk full".to_string(),
        ..Default::default()
    });
    let err = failing.set_wallpaper(DisplayId::new(1), "/tmp/a.png", None).unwrap_err();
    match err {
        WallpaperError::SetFailed(message) => assert_eq!(message, "disk full"),
        other => panic!("Expected SetFailed, got {other:?}"),
    }
}

#[test]
fn path_failure_propagates_backend_message() {
    let wallpaper = DesktopWallpaper::new(RecordingBackend::default());
    let err = wallpaper.wallpaper_path_for_screen(DisplayId::new(9)).unwrap_err();
    assert_eq!(err.to_string(), "no screen 9");
}

#[test]
fn boxed_backend_is_accepted() {
    let backend: Box<dyn WallpaperBackend> =
        Box::new(RecordingBackend { options: raw(2, 1), ..Default::default() });
    let wallpaper = DesktopWallpaper::new(backend);
    let options = wallpaper.wallpaper_options_for_screen(DisplayId::new(1)).unwrap();
    assert_eq!(options.image_scaling, ImageScaling::None);
}
