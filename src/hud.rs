//! Playfield drawing and on-screen-display text
//!
//! The playfield goes to the framebuffer pixel by pixel; text goes to the
//! character overlay as fixed glyph codes (digits at 48+n, letters at 64+n).

use crate::consts::{COLOR_BONUS, COLOR_OPEN, COLOR_WALL};
use crate::platform::{FrameBuffer, OnScreenDisplay};
use crate::sim::{BonusZone, ClockState, GameState, MazeBitmap};

/// Label palette (foreground, background)
pub const LABEL_PALETTE: (u16, u16) = (0x001, 0x000);
/// Status panel palette
pub const STATUS_PALETTE: (u16, u16) = (0xFFF, 0x001);

/// Leftmost overlay column of the status panel
pub const STATUS_COL: u16 = 198;
pub const TIME_LABEL_ROW: u16 = 0;
pub const TIME_ROW: u16 = 1;
pub const POINTS_LABEL_ROW: u16 = 3;
pub const POINTS_ROW: u16 = 4;

/// Overlay cells of the "GAME"/"OVER" banners (one per side of the maze)
pub const GAME_OVER_COLS: [u16; 2] = [200, 4];
pub const GAME_OVER_ROW: u16 = 13;

const GLYPH_DIGIT_BASE: u8 = 48;
const GLYPH_LETTER_BASE: u8 = 64;
const GLYPH_COLON: u8 = 58;
const GLYPH_SPACE: u8 = 32;

/// Glyph code for a display character. Letters are case-folded; anything
/// without a glyph renders as a space.
pub fn glyph_code(c: char) -> u8 {
    match c.to_ascii_uppercase() {
        d @ '0'..='9' => GLYPH_DIGIT_BASE + (d as u8 - b'0'),
        l @ 'A'..='Z' => GLYPH_LETTER_BASE + (l as u8 - b'A' + 1),
        ':' => GLYPH_COLON,
        _ => GLYPH_SPACE,
    }
}

/// Inverse of [`glyph_code`] for the characters it produces
pub fn glyph_char(code: u8) -> char {
    match code {
        48..=57 => (b'0' + (code - GLYPH_DIGIT_BASE)) as char,
        65..=90 => (b'A' + (code - GLYPH_LETTER_BASE - 1)) as char,
        GLYPH_COLON => ':',
        _ => ' ',
    }
}

/// Write `text` left to right starting at (col, row)
pub fn write_text(osd: &mut dyn OnScreenDisplay, col: u16, row: u16, text: &str) {
    for (i, c) in text.chars().enumerate() {
        osd.write_glyph(col + i as u16, row, glyph_code(c));
    }
}

/// Paint every bitmap pixel: open floor white, wall black
pub fn draw_maze(fb: &mut dyn FrameBuffer, maze: &MazeBitmap) {
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let color = if maze.is_wall(x, y) {
                COLOR_WALL
            } else {
                COLOR_OPEN
            };
            fb.write_pixel(x, y, color);
        }
    }
}

/// Fill a bonus square red, or white once collected
pub fn draw_bonus_zone(fb: &mut dyn FrameBuffer, zone: &BonusZone) {
    let color = if zone.collected {
        COLOR_OPEN
    } else {
        COLOR_BONUS
    };
    for y in zone.origin.y..zone.origin.y + zone.size {
        for x in zone.origin.x..zone.origin.x + zone.size {
            fb.write_pixel(x, y, color);
        }
    }
}

pub fn draw_bonus_zones(fb: &mut dyn FrameBuffer, zones: &[BonusZone]) {
    for zone in zones {
        draw_bonus_zone(fb, zone);
    }
}

/// "START" near the spawn, "END" near the exit
pub fn draw_labels(osd: &mut dyn OnScreenDisplay) {
    osd.set_palette(LABEL_PALETTE.0, LABEL_PALETTE.1);
    write_text(osd, 11, 1, "START");
    write_text(osd, 7, 29, "END");
}

/// `m:ss`, saturating at 9:59
pub fn format_clock(clock: &ClockState) -> String {
    let (minutes, seconds) = clock.minutes_seconds();
    if minutes > 9 {
        return "9:59".to_string();
    }
    format!("{}:{:02}", minutes, seconds)
}

/// Four digits, clamped to 0..=9999
pub fn format_points(points: i32) -> String {
    format!("{:04}", points.clamp(0, 9999))
}

/// TIME / POINTS panel on the right of the maze
pub fn draw_status(osd: &mut dyn OnScreenDisplay, clock: &ClockState, points: i32) {
    osd.set_palette(STATUS_PALETTE.0, STATUS_PALETTE.1);
    write_text(osd, STATUS_COL, TIME_LABEL_ROW, "TIME:");
    write_text(osd, STATUS_COL, TIME_ROW, &format_clock(clock));
    write_text(osd, STATUS_COL, POINTS_LABEL_ROW, "POINTS:");
    write_text(osd, STATUS_COL, POINTS_ROW, &format_points(points));
}

pub fn draw_game_over(osd: &mut dyn OnScreenDisplay) {
    for col in GAME_OVER_COLS {
        write_text(osd, col, GAME_OVER_ROW, "GAME");
        write_text(osd, col, GAME_OVER_ROW + 1, "OVER");
    }
}

/// Full repaint after a reset: overlay cleared, playfield, bonuses, labels, status
pub fn redraw<S>(screen: &mut S, maze: &MazeBitmap, state: &GameState)
where
    S: FrameBuffer + OnScreenDisplay,
{
    screen.clear_screen();
    draw_maze(screen, maze);
    draw_bonus_zones(screen, &state.bonus_zones);
    draw_labels(screen);
    draw_status(screen, &state.clock, state.points());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryScreen;
    use crate::settings::Settings;
    use crate::sim::Calibration;

    fn text(screen: &MemoryScreen, col: u16, row: u16, len: u16) -> String {
        screen
            .glyph_run(col, row, len)
            .into_iter()
            .map(glyph_char)
            .collect()
    }

    #[test]
    fn test_glyph_table() {
        assert_eq!(glyph_code('0'), 48);
        assert_eq!(glyph_code('9'), 57);
        assert_eq!(glyph_code('A'), 65);
        assert_eq!(glyph_code('t'), 64 + 20);
        assert_eq!(glyph_code(':'), 58);
        assert_eq!(glyph_code('!'), 32);
        assert_eq!(glyph_char(64 + 19), 'S');
    }

    #[test]
    fn test_formatting_saturates() {
        assert_eq!(format_clock(&ClockState { elapsed_seconds: 65 }), "1:05");
        assert_eq!(format_clock(&ClockState { elapsed_seconds: 3600 }), "9:59");
        assert_eq!(format_points(995), "0995");
        assert_eq!(format_points(-3), "0000");
        assert_eq!(format_points(12_345), "9999");
    }

    #[test]
    fn test_status_panel_layout() {
        let mut screen = MemoryScreen::new(8, 8);
        draw_status(&mut screen, &ClockState { elapsed_seconds: 75 }, 1100);
        assert_eq!(screen.palette(), STATUS_PALETTE);
        assert_eq!(text(&screen, STATUS_COL, TIME_LABEL_ROW, 5), "TIME:");
        assert_eq!(text(&screen, STATUS_COL, TIME_ROW, 4), "1:15");
        assert_eq!(text(&screen, STATUS_COL, POINTS_LABEL_ROW, 7), "POINTS:");
        assert_eq!(text(&screen, STATUS_COL, POINTS_ROW, 4), "1100");
    }

    #[test]
    fn test_bonus_zone_paint_and_clear() {
        let mut screen = MemoryScreen::new(64, 64);
        let mut zone = BonusZone::new(10, 20);
        draw_bonus_zone(&mut screen, &zone);
        assert_eq!(screen.pixel(10, 20), Some(COLOR_BONUS));
        assert_eq!(screen.pixel(25, 35), Some(COLOR_BONUS));
        assert_eq!(screen.pixel(26, 35), Some(0));

        zone.collected = true;
        draw_bonus_zone(&mut screen, &zone);
        assert_eq!(screen.pixel(10, 20), Some(COLOR_OPEN));
    }

    #[test]
    fn test_redraw_paints_maze_and_labels() {
        let maze = MazeBitmap::builder(32, 32).unwrap().border(4).build();
        let state = GameState::new(Calibration::default(), &Settings::default());
        let mut screen = MemoryScreen::new(32, 32);
        screen.write_glyph(200, 13, glyph_code('G'));

        redraw(&mut screen, &maze, &state);

        assert_eq!(screen.clears(), 1);
        assert_eq!(screen.glyph(200, 13), None);
        assert_eq!(screen.pixel(0, 0), Some(COLOR_WALL));
        assert_eq!(screen.pixel(10, 10), Some(COLOR_OPEN));
        assert_eq!(text(&screen, 11, 1, 5), "START");
        assert_eq!(text(&screen, 7, 29, 3), "END");
        assert_eq!(text(&screen, STATUS_COL, POINTS_ROW, 4), "1000");
    }

    #[test]
    fn test_game_over_banner_both_sides() {
        let mut screen = MemoryScreen::new(8, 8);
        draw_game_over(&mut screen);
        for col in GAME_OVER_COLS {
            assert_eq!(text(&screen, col, GAME_OVER_ROW, 4), "GAME");
            assert_eq!(text(&screen, col, GAME_OVER_ROW + 1, 4), "OVER");
        }
    }
}
