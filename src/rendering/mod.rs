use ggez::graphics::{Color, DrawMode, DrawParam, Image, Mesh, MeshBuilder, Rect};
use ggez::{Context, GameResult};

use crate::basic::board::{
    CELL_HEIGHT, CELL_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, WALL_THICKNESS,
};
use crate::basic::Point;
use crate::game::Snake;

pub const BACKGROUND_COLOR: Color = Color {
    r: 30. / 255.,
    g: 50. / 255.,
    b: 60. / 255.,
    a: 1.,
};

const WALL_COLOR: Color = Color {
    r: 110. / 255.,
    g: 150. / 255.,
    b: 170. / 255.,
    a: 1.,
};

const SNAKE_COLOR: Color = Color {
    r: 200. / 255.,
    g: 188. / 255.,
    b: 178. / 255.,
    a: 1.,
};

const DEAD_SNAKE_COLOR: Color = Color {
    r: 210. / 255.,
    g: 40. / 255.,
    b: 30. / 255.,
    a: 1.,
};

pub fn cell_rect(point: Point) -> Rect {
    Rect::new(
        point.x as f32,
        point.y as f32,
        CELL_WIDTH as f32,
        CELL_HEIGHT as f32,
    )
}

/// A `DrawParam` that stretches `image` over `rect`
pub fn fit_to_rect(image: &Image, rect: Rect) -> DrawParam {
    DrawParam::default().dest([rect.x, rect.y]).scale([
        rect.w / image.width() as f32,
        rect.h / image.height() as f32,
    ])
}

pub fn screen_rect() -> Rect {
    Rect::new(0., 0., SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
}

/// The four wall slabs framing the playable interior; the board never
/// resizes so this mesh is built once and cached
pub fn wall_mesh(ctx: &mut Context) -> GameResult<Mesh> {
    let w = SCREEN_WIDTH as f32;
    let h = SCREEN_HEIGHT as f32;
    let t = WALL_THICKNESS as f32;

    let mut builder = MeshBuilder::new();
    builder.rectangle(DrawMode::fill(), Rect::new(0., 0., t, h), WALL_COLOR)?;
    builder.rectangle(DrawMode::fill(), Rect::new(w - t, 0., t, h), WALL_COLOR)?;
    builder.rectangle(DrawMode::fill(), Rect::new(0., 0., w, t), WALL_COLOR)?;
    builder.rectangle(DrawMode::fill(), Rect::new(0., h - t, w, t), WALL_COLOR)?;
    Ok(Mesh::from_data(ctx, builder.build()))
}

/// Rebuilt every frame, the body changes every tick anyway. The head
/// is a plain filled cell, body cells get a black outline; a dead
/// snake is drawn all red.
pub fn snake_mesh(ctx: &mut Context, snake: &Snake, dead: bool) -> GameResult<Mesh> {
    let color = if dead { DEAD_SNAKE_COLOR } else { SNAKE_COLOR };

    let mut builder = MeshBuilder::new();
    builder.rectangle(DrawMode::fill(), cell_rect(snake.head()), color)?;
    for &cell in snake.cells.iter().skip(1) {
        builder.rectangle(DrawMode::fill(), cell_rect(cell), color)?;
        builder.rectangle(DrawMode::stroke(1.), cell_rect(cell), Color::BLACK)?;
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_rect_matches_cell_size() {
        let rect = cell_rect(Point::new(200, 180));
        assert_eq!(rect, Rect::new(200., 180., 20., 20.));
    }
}
