//! Frame rendering and the SSD1306 OLED wrapper.
//!
//! `draw_frame` is a pure function of a `FrameModel`, generic over any
//! `DrawTarget` so host tests can render into a `MockDisplay`. The
//! ssd1306 plumbing (init/present) is compiled only for the target.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::app::FrameModel;
use crate::config::{
    DEMO_INPUT_X, DEMO_INPUT_Y, DEMO_OUTPUT_X, DEMO_OUTPUT_Y, DISPLAY_WIDTH, FONT_WIDTH,
    MENU_COL1_X, MENU_COL2_X, MENU_ROWS, MENU_Y_START, MENU_Y_STEP, SELECT_BOX_DX, SELECT_BOX_DY,
    SELECT_BOX_H, SELECT_BOX_W, TITLE_Y,
};
use crate::gate::GateKind;

/// Menu screen title.
pub const MENU_TITLE: &str = "PORTAS LOGICAS";

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// X position that centers `text` on the display.
fn centered_x(text: &str) -> i32 {
    (DISPLAY_WIDTH - text.len() as i32 * FONT_WIDTH) / 2
}

/// Label origin of menu slot `i`: four rows per column, two columns.
fn item_origin(i: usize) -> Point {
    let x = if i < MENU_ROWS { MENU_COL1_X } else { MENU_COL2_X };
    let y = MENU_Y_START + (i % MENU_ROWS) as i32 * MENU_Y_STEP;
    Point::new(x, y)
}

/// Demo-view input line: "A: 1" for NOT, "A: 1  B: 0" otherwise.
pub fn demo_input_line(gate: GateKind, a: bool, b: bool) -> heapless::String<16> {
    let mut line = heapless::String::new();
    if gate.is_unary() {
        let _ = write!(line, "A: {}", a as u8);
    } else {
        let _ = write!(line, "A: {}  B: {}", a as u8, b as u8);
    }
    line
}

/// Demo-view output line, "Saida" = output.
pub fn demo_output_line(result: bool) -> heapless::String<16> {
    let mut line = heapless::String::new();
    let _ = write!(line, "Saida: {}", result as u8);
    line
}

/// Draw one full frame into `target`. Idempotent for equal models.
pub fn draw_frame<D>(target: &mut D, frame: &FrameModel) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    match *frame {
        FrameModel::Menu { selected } => draw_menu(target, selected),
        FrameModel::Demo { gate, a, b, result } => draw_demo(target, gate, a, b, result),
    }
}

fn draw_menu<D>(target: &mut D, selected: usize) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = text_style();

    Text::with_baseline(
        MENU_TITLE,
        Point::new(centered_x(MENU_TITLE), TITLE_Y),
        style,
        Baseline::Top,
    )
    .draw(target)?;

    for (i, gate) in GateKind::ALL.iter().enumerate() {
        Text::with_baseline(gate.label(), item_origin(i), style, Baseline::Top).draw(target)?;
    }

    let origin = item_origin(selected);
    Rectangle::new(
        Point::new(origin.x + SELECT_BOX_DX, origin.y + SELECT_BOX_DY),
        Size::new(SELECT_BOX_W, SELECT_BOX_H),
    )
    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
    .draw(target)?;

    Ok(())
}

fn draw_demo<D>(target: &mut D, gate: GateKind, a: bool, b: bool, result: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = text_style();
    let title = gate.label();

    Text::with_baseline(
        title,
        Point::new(centered_x(title), TITLE_Y),
        style,
        Baseline::Top,
    )
    .draw(target)?;

    Text::with_baseline(
        demo_input_line(gate, a, b).as_str(),
        Point::new(DEMO_INPUT_X, DEMO_INPUT_Y),
        style,
        Baseline::Top,
    )
    .draw(target)?;

    Text::with_baseline(
        demo_output_line(result).as_str(),
        Point::new(DEMO_OUTPUT_X, DEMO_OUTPUT_Y),
        style,
        Baseline::Top,
    )
    .draw(target)?;

    Ok(())
}

// ---------------------------------------------------------------------
// SSD1306 plumbing (target only)
// ---------------------------------------------------------------------

#[cfg(feature = "embedded")]
mod oled {
    use ssd1306::mode::BufferedGraphicsMode;
    use ssd1306::prelude::*;
    use ssd1306::I2CDisplayInterface;
    use ssd1306::Ssd1306;

    use super::draw_frame;
    use crate::app::FrameModel;
    use crate::error::Error;

    /// Type alias for the concrete display driver.
    ///
    /// Generic over the I²C implementation so callers pass in their
    /// HAL's I²C peripheral.
    pub type Display<I2C> =
        Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

    /// Initialise the SSD1306 display and clear the screen.
    ///
    /// Init failure is fatal for the application; the caller halts.
    pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| Error::DisplayInit)?;
        display.clear_buffer();
        display.flush().map_err(|_| Error::DisplayInit)?;
        Ok(display)
    }

    /// Full-frame redraw: clear, draw the model, flush.
    pub fn present<I2C>(display: &mut Display<I2C>, frame: &FrameModel)
    where
        I2C: embedded_hal::i2c::I2c,
    {
        display.clear_buffer();
        let _ = draw_frame(display, frame);
        let _ = display.flush();
    }
}

#[cfg(feature = "embedded")]
pub use oled::{init, present, Display};
