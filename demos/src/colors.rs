//! Color palette for the workbench, chosen for a dark terminal background.

use gridway_core::Color;

// -- Backgrounds --

/// Default terminal background (reset).
pub const BG: Color = Color::DEFAULT;
/// Status bar background.
pub const STATUS_BG: Color = Color::from_rgb(30, 30, 50);

// -- Cell foregrounds --

/// Untouched cell '·'.
pub const EMPTY_FG: Color = Color::from_rgb(110, 115, 125);
/// Obstacle '#'.
pub const OBSTACLE_FG: Color = Color::from_rgb(150, 155, 170);
/// Start marker 'S'.
pub const START_FG: Color = Color::from_rgb(80, 200, 80);
/// Goal marker 'G'.
pub const GOAL_FG: Color = Color::from_rgb(255, 85, 85);
/// Frontier cell 'o'.
pub const OPEN_FG: Color = Color::from_rgb(140, 210, 140);
/// Expanded cell 'x'.
pub const CLOSED_FG: Color = Color::from_rgb(100, 160, 220);

// -- Overlays --

/// Walked path '*'.
pub const PATH_FG: Color = Color::from_rgb(220, 200, 60);

// -- Status bar --

pub const STATUS_FG: Color = Color::from_rgb(200, 200, 200);
/// Key-help line.
pub const HELP_FG: Color = Color::from_rgb(130, 130, 150);
