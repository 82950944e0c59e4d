//! macOS wallpaper backend.
//!
//! Uses `NSWorkspace` desktop image APIs to read and set the wallpaper and its
//! options for the `NSScreen` matching a CoreGraphics display ID.

use std::path::Path;

use core_graphics::display::CGDisplay;
use objc::runtime::{BOOL, NO, Object, YES};
use objc::{class, msg_send, sel, sel_impl};

use super::backend::{RawWallpaperOptions, RawWallpaperRequest, WallpaperBackend};
use crate::error::BackendError;
use crate::options::DisplayId;
use crate::utils::objc::{nserror_description, nsstring, nsstring_to_string};

#[link(name = "AppKit", kind = "framework")]
unsafe extern "C" {
    static NSWorkspaceDesktopImageScalingKey: *mut Object;
    static NSWorkspaceDesktopImageAllowClippingKey: *mut Object;
    static NSWorkspaceDesktopImageFillColorKey: *mut Object;
}

/// `NSImageScaleProportionallyUpOrDown`, exchanged as `-1` with callers.
const NS_IMAGE_SCALE_PROPORTIONALLY_UP_OR_DOWN: isize = 3;

/// Raw scaling value for proportional scaling.
const RAW_SCALE_PROPORTIONALLY_UP_OR_DOWN: i32 = -1;

/// Wallpaper backend backed by `NSWorkspace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacosBackend;

impl MacosBackend {
    /// Creates the backend.
    #[must_use]
    pub const fn new() -> Self { Self }
}

/// Finds the `NSScreen` whose `NSScreenNumber` equals `display`.
fn screen_for_display(display: DisplayId) -> Option<*mut Object> {
    unsafe {
        let screens: *mut Object = msg_send![class!(NSScreen), screens];
        if screens.is_null() {
            return None;
        }

        let key = nsstring("NSScreenNumber");
        let count: usize = msg_send![screens, count];
        (0..count).find_map(|index| {
            let screen: *mut Object = msg_send![screens, objectAtIndex: index];
            if screen.is_null() {
                return None;
            }
            let description: *mut Object = msg_send![screen, deviceDescription];
            if description.is_null() {
                return None;
            }
            let number: *mut Object = msg_send![description, objectForKey: key];
            if number.is_null() {
                return None;
            }
            let id: u32 = msg_send![number, unsignedIntValue];
            (id == display.get()).then_some(screen)
        })
    }
}

fn shared_workspace() -> Option<*mut Object> {
    let workspace: *mut Object = unsafe { msg_send![class!(NSWorkspace), sharedWorkspace] };
    (!workspace.is_null()).then_some(workspace)
}

/// Reads the fill color as sRGB components.
fn fill_color_components(color: *mut Object) -> Option<(f64, f64, f64, f64)> {
    unsafe {
        let srgb: *mut Object = msg_send![class!(NSColorSpace), sRGBColorSpace];
        let converted: *mut Object = msg_send![color, colorUsingColorSpace: srgb];
        if converted.is_null() {
            return None;
        }
        let red: f64 = msg_send![converted, redComponent];
        let green: f64 = msg_send![converted, greenComponent];
        let blue: f64 = msg_send![converted, blueComponent];
        let alpha: f64 = msg_send![converted, alphaComponent];
        Some((red, green, blue, alpha))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scaling_from_native(value: isize) -> i32 {
    if value == NS_IMAGE_SCALE_PROPORTIONALLY_UP_OR_DOWN {
        RAW_SCALE_PROPORTIONALLY_UP_OR_DOWN
    } else {
        value as i32
    }
}

fn scaling_to_native(raw: i32) -> isize {
    if raw == RAW_SCALE_PROPORTIONALLY_UP_OR_DOWN {
        NS_IMAGE_SCALE_PROPORTIONALLY_UP_OR_DOWN
    } else {
        raw as isize
    }
}

impl WallpaperBackend for MacosBackend {
    fn set_wallpaper(&self, request: &RawWallpaperRequest<'_>) -> String {
        let path = Path::new(request.path);
        if !path.exists() {
            return format!("Wallpaper file not found: {}", path.display());
        }

        let Some(screen) = screen_for_display(request.display) else {
            return format!("No screen with display ID {}", request.display);
        };
        let Some(workspace) = shared_workspace() else {
            return "Failed to get shared workspace".to_string();
        };

        unsafe {
            let path_ns = nsstring(request.path);
            let url: *mut Object = msg_send![class!(NSURL), fileURLWithPath: path_ns];
            if url.is_null() {
                return "Failed to create URL from path".to_string();
            }

            let scaling: *mut Object = msg_send![
                class!(NSNumber),
                numberWithInteger: scaling_to_native(request.scaling)
            ];
            let allow_clipping: BOOL = if request.allow_clipping == 0 { YES } else { NO };
            let clipping: *mut Object =
                msg_send![class!(NSNumber), numberWithBool: allow_clipping];
            let color: *mut Object = msg_send![
                class!(NSColor),
                colorWithSRGBRed: request.red
                green: request.green
                blue: request.blue
                alpha: request.alpha
            ];

            let options: *mut Object = msg_send![class!(NSMutableDictionary), dictionary];
            let () = msg_send![options, setObject: scaling forKey: NSWorkspaceDesktopImageScalingKey];
            let () =
                msg_send![options, setObject: clipping forKey: NSWorkspaceDesktopImageAllowClippingKey];
            if !color.is_null() {
                let () =
                    msg_send![options, setObject: color forKey: NSWorkspaceDesktopImageFillColorKey];
            }

            let mut error: *mut Object = std::ptr::null_mut();
            let success: BOOL = msg_send![
                workspace,
                setDesktopImageURL: url
                forScreen: screen
                options: options
                error: &mut error
            ];

            if success == NO {
                return nserror_description(error).unwrap_or_else(|| "Unknown error".to_string());
            }
        }

        String::new()
    }

    fn wallpaper_path_for_screen(&self, display: DisplayId) -> Result<String, BackendError> {
        let screen = screen_for_display(display)
            .ok_or_else(|| BackendError::new(format!("No screen with display ID {display}")))?;
        let workspace =
            shared_workspace().ok_or_else(|| BackendError::new("Failed to get shared workspace"))?;

        unsafe {
            let url: *mut Object = msg_send![workspace, desktopImageURLForScreen: screen];
            if url.is_null() {
                return Err(BackendError::new(format!("No wallpaper set for display {display}")));
            }
            let path: *mut Object = msg_send![url, path];
            Ok(nsstring_to_string(path))
        }
    }

    fn wallpaper_options_for_screen(&self, display_id: DisplayId) -> RawWallpaperOptions {
        let (Some(screen), Some(workspace)) = (screen_for_display(display_id), shared_workspace())
        else {
            return RawWallpaperOptions::default();
        };

        let mut raw = RawWallpaperOptions::default();
        unsafe {
            let options: *mut Object = msg_send![workspace, desktopImageOptionsForScreen: screen];
            if options.is_null() {
                return raw;
            }

            let scaling: *mut Object =
                msg_send![options, objectForKey: NSWorkspaceDesktopImageScalingKey];
            if !scaling.is_null() {
                let value: isize = msg_send![scaling, integerValue];
                raw.scaling = Some(scaling_from_native(value));
            }

            let clipping: *mut Object =
                msg_send![options, objectForKey: NSWorkspaceDesktopImageAllowClippingKey];
            if !clipping.is_null() {
                let allowed: BOOL = msg_send![clipping, boolValue];
                raw.allow_clipping = Some(if allowed == NO { 1 } else { 0 });
            }

            let color: *mut Object =
                msg_send![options, objectForKey: NSWorkspaceDesktopImageFillColorKey];
            if let Some((red, green, blue, alpha)) =
                (!color.is_null()).then(|| fill_color_components(color)).flatten()
            {
                raw.red = Some(red);
                raw.green = Some(green);
                raw.blue = Some(blue);
                raw.alpha = Some(alpha);
            }
        }

        tracing::trace!(display = %display_id, ?raw, "native desktop image options");
        raw
    }

    fn main_display(&self) -> Option<DisplayId> { Some(DisplayId::new(CGDisplay::main().id)) }

    fn name(&self) -> &'static str { "macos" }
}
