//! Platform-independent frame description

use glam::Vec2;

use crate::Rect;
use crate::scenery::Scenery;
use crate::sim::{GameSession, Playfield};

/// Which end of a pipe segment gets the rounded lip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeCap {
    /// Upper segment: lip faces down into the gate
    Bottom,
    /// Lower segment: lip faces up into the gate
    Top,
}

/// A centered line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
    pub font_px: f32,
}

/// One drawing step, in painter's order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sky(Playfield),
    Cloud { center: Vec2, size: f32 },
    Pipe { rect: Rect, cap: PipeCap },
    Avatar { center: Vec2, size: Vec2 },
    /// Translucent dimming over the whole playfield
    Shade(Playfield),
    Text(TextLine),
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub score: u32,
    pub high_score: u32,
}

impl Frame {
    /// Snapshot the session (and optional clouds) into draw commands,
    /// including the game-over overlay once the run has ended
    pub fn capture(session: &GameSession, scenery: Option<&Scenery>) -> Self {
        let mut frame = Self::scene(session, scenery);
        if session.is_over() {
            game_over_overlay(&mut frame.commands, session, &session.playfield());
        }
        frame
    }

    /// Sky, clouds, pipes and avatar only
    pub fn scene(session: &GameSession, scenery: Option<&Scenery>) -> Self {
        let playfield = session.playfield();
        let mut commands = Vec::with_capacity(4 + session.obstacles.len() * 2);

        commands.push(DrawCommand::Sky(playfield));

        if let Some(scenery) = scenery {
            commands.extend(scenery.clouds.iter().map(|c| DrawCommand::Cloud {
                center: Vec2::new(c.x, c.y),
                size: c.size,
            }));
        }

        for obstacle in &session.obstacles {
            commands.push(DrawCommand::Pipe {
                rect: obstacle.top_segment(),
                cap: PipeCap::Bottom,
            });
            commands.push(DrawCommand::Pipe {
                rect: obstacle.bottom_segment(&playfield),
                cap: PipeCap::Top,
            });
        }

        commands.push(DrawCommand::Avatar {
            center: session.avatar.pos,
            size: session.avatar.size,
        });

        Self {
            commands,
            score: session.score.current,
            high_score: session.score.high.best,
        }
    }

    /// HUD score line
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// HUD high score line
    pub fn high_score_text(&self) -> String {
        format!("High Score: {}", self.high_score)
    }
}

fn game_over_overlay(
    commands: &mut Vec<DrawCommand>,
    session: &GameSession,
    playfield: &Playfield,
) {
    let cx = playfield.width / 2.0;
    let cy = playfield.height / 2.0;
    let line = |text: String, dy: f32, font_px: f32| {
        DrawCommand::Text(TextLine {
            text,
            pos: Vec2::new(cx, cy + dy),
            font_px,
        })
    };

    commands.push(DrawCommand::Shade(*playfield));
    commands.push(line("Game Over".to_string(), -20.0, 48.0));
    commands.push(line(format!("Score: {}", session.score.current), 20.0, 24.0));
    commands.push(line(
        format!("High Score: {}", session.score.high.best),
        55.0,
        24.0,
    ));
    commands.push(line("Click to Restart".to_string(), 90.0, 24.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScore;
    use crate::sim::{GamePhase, Obstacle};
    use crate::tuning::Tuning;

    fn session_with_obstacle() -> GameSession {
        let mut session = GameSession::new(5, Tuning::default(), HighScore::new(7)).unwrap();
        session.obstacles.push(Obstacle {
            x: 250.0,
            width: 60.0,
            top_edge: 120.0,
            bottom_edge: 270.0,
            passed: false,
        });
        session
    }

    #[test]
    fn test_running_frame_order() {
        let session = session_with_obstacle();
        let frame = Frame::capture(&session, None);

        assert_eq!(frame.commands.len(), 4);
        assert!(matches!(frame.commands[0], DrawCommand::Sky(_)));
        assert_eq!(
            frame.commands[1],
            DrawCommand::Pipe {
                rect: Rect::new(250.0, 0.0, 60.0, 120.0),
                cap: PipeCap::Bottom
            }
        );
        assert_eq!(
            frame.commands[2],
            DrawCommand::Pipe {
                rect: Rect::new(250.0, 270.0, 60.0, 330.0),
                cap: PipeCap::Top
            }
        );
        assert!(matches!(frame.commands[3], DrawCommand::Avatar { .. }));
        assert_eq!(frame.score_text(), "Score: 0");
        assert_eq!(frame.high_score_text(), "High Score: 7");
    }

    #[test]
    fn test_clouds_drawn_behind_pipes() {
        let session = session_with_obstacle();
        let scenery = Scenery::new(session.playfield(), 3, 1);
        let frame = Frame::capture(&session, Some(&scenery));

        let kinds: Vec<&str> = frame
            .commands
            .iter()
            .map(|c| match c {
                DrawCommand::Sky(_) => "sky",
                DrawCommand::Cloud { .. } => "cloud",
                DrawCommand::Pipe { .. } => "pipe",
                DrawCommand::Avatar { .. } => "avatar",
                DrawCommand::Shade(_) => "shade",
                DrawCommand::Text(_) => "text",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["sky", "cloud", "cloud", "cloud", "pipe", "pipe", "avatar"]
        );
    }

    #[test]
    fn test_game_over_overlay_text() {
        let mut session = session_with_obstacle();
        session.phase = GamePhase::Over;
        session.score.current = 3;

        let frame = Frame::capture(&session, None);
        let texts: Vec<&str> = frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(line) => Some(line.text.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(
            texts,
            vec!["Game Over", "Score: 3", "High Score: 7", "Click to Restart"]
        );
        assert!(
            frame
                .commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Shade(_)))
        );
    }

    #[test]
    fn test_scene_omits_overlay() {
        let mut session = session_with_obstacle();
        session.phase = GamePhase::Over;
        let frame = Frame::scene(&session, None);
        assert_eq!(frame.commands.len(), 4);
        assert!(matches!(frame.commands[3], DrawCommand::Avatar { .. }));
    }
}
