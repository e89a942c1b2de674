//! Drawing helpers and the static top-level screens.
//!
//! The panel is a 128x32 monochrome OLED. Body text uses a 5x8 font (four
//! rows), titles a 9x15 font. Rendering is a pure read of state; nothing in
//! this module mutates the app.

extern crate alloc;

use alloc::string::String;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_5X8, FONT_9X15},
        MonoTextStyle, MonoTextStyleBuilder,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{Baseline, Text},
};

use crate::lifecycle::ReconnectAttempt;
use crate::radio::Radio;
use crate::screen::{Navigator, MENU_ITEMS};

/// Second body row, below a title.
pub(crate) const BODY_Y: i32 = 16;
/// Last body row.
pub(crate) const FOOTER_Y: i32 = 24;

pub(crate) fn title<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
) -> Result<(), D::Error> {
    let style = MonoTextStyle::new(&FONT_9X15, BinaryColor::On);
    Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(display)?;
    Ok(())
}

pub(crate) fn body<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
) -> Result<(), D::Error> {
    let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
    Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(display)?;
    Ok(())
}

fn body_inverted<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
) -> Result<(), D::Error> {
    let style = MonoTextStyleBuilder::new()
        .font(&FONT_5X8)
        .text_color(BinaryColor::Off)
        .background_color(BinaryColor::On)
        .build();
    Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(display)?;
    Ok(())
}

/// Horizontal menu bar with the highlighted entry inverted, ruled off below.
pub(crate) fn draw_nav<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    highlight: usize,
) -> Result<(), D::Error> {
    let mut x = 0i32;
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        if i == highlight {
            body_inverted(display, item, x, 0)?;
        } else {
            body(display, item, x, 0)?;
        }
        x += (item.len() as i32) * 5 + 12;
    }
    let width = display.bounding_box().size.width as i32;
    Line::new(Point::new(0, 9), Point::new(width - 1, 9))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)?;
    Ok(())
}

/// Menu screen, or the reconnect notice while a boot reconnect is running.
pub(crate) fn draw_menu<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    nav: &Navigator,
    reconnect: Option<&ReconnectAttempt>,
) -> Result<(), D::Error> {
    if let Some(attempt) = reconnect {
        title(display, "Reconnect", 0, 0)?;
        body(display, "Connecting to:", 0, BODY_Y)?;
        body(display, &attempt.ssid, 0, FOOTER_Y)?;
        return Ok(());
    }
    draw_nav(display, nav.menu_index())?;
    title(display, MENU_ITEMS[nav.menu_index()], 0, 15)?;
    Ok(())
}

pub(crate) fn draw_info<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    radio: &dyn Radio,
) -> Result<(), D::Error> {
    title(display, "Info", 0, 0)?;
    match radio.local_address() {
        Some(address) => {
            let mut line = String::from("IP: ");
            line.push_str(&address);
            body(display, &line, 0, BODY_Y)?;
        }
        None => body(display, "WiFi Disconnected", 0, BODY_Y)?,
    }
    Ok(())
}

pub(crate) fn draw_config<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
) -> Result<(), D::Error> {
    title(display, "Config", 0, 0)?;
    body(display, "This is the config page", 0, BODY_Y)?;
    Ok(())
}

pub(crate) fn draw_help<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
) -> Result<(), D::Error> {
    title(display, "Help", 0, 0)?;
    body(display, "UP/DOWN to nav", 0, BODY_Y)?;
    body(display, "SELECT to choose/back", 0, FOOTER_Y)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_display::TestDisplay;

    #[test]
    fn nav_bar_renders_all_entries() {
        let mut display = TestDisplay::default_size();
        draw_nav(&mut display, 0).unwrap();
        assert!(display.black_pixel_count() > 0);
    }

    #[test]
    fn static_screens_render_without_error() {
        let mut display = TestDisplay::default_size();
        draw_config(&mut display).unwrap();
        draw_help(&mut display).unwrap();
        assert!(display.black_pixel_count() > 0);
    }
}
