//! Parallax demo application
//!
//! Builds a three-layer scene (a slow star field, a tilemap and a HUD
//! callback), pans the camera for a few frames and logs the draw commands
//! each frame produces. Pass a `.toml` or `.ron` stack config as the first
//! argument to override the screen size and layer defaults.

use layer_stack::foundation::logging;
use layer_stack::prelude::*;
use rand::prelude::*;

const FRAMES: u32 = 5;
const STAR_COUNT: usize = 40;
const CAMERA_STEP: f32 = 48.0;

/// Tile sheet with fixed-size tiles
struct TileSheet {
    tile_width: u32,
    tile_height: u32,
}

impl Tileset for TileSheet {
    fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }
}

/// Row-major grid of tile ids; 0 means empty
struct Grid {
    columns: usize,
    rows: usize,
    tiles: Vec<u32>,
    sheet: Option<TileSheet>,
}

impl Grid {
    fn ground(columns: usize, rows: usize, sheet: TileSheet) -> Self {
        let tiles = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| if row + 2 >= rows { 1 + (column % 3) as u32 } else { 0 }))
            .collect();
        Self {
            columns,
            rows,
            tiles,
            sheet: Some(sheet),
        }
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
impl Tilemap for Grid {
    fn tileset(&self) -> Option<&dyn Tileset> {
        self.sheet.as_ref().map(|sheet| sheet as &dyn Tileset)
    }

    fn draw_region(&self, anchor: Vec2, region: WorldRect, tile_scale: Vec2, draw_list: &mut DrawList) {
        let Some(sheet) = &self.sheet else { return };
        let tile = Vec2::new(sheet.tile_width as f32, sheet.tile_height as f32);
        let layer_scale = tile_scale.component_mul(&tile);
        let size = tile.component_mul(&layer_scale);

        let span = |min: f32, max: f32, step: f32, limit: usize| {
            let first = (min / step).floor().max(0.0) as usize;
            let last = ((max / step).ceil().max(0.0) as usize).min(limit);
            first..last
        };

        for row in span(region.top_left.y, region.bottom_right.y, tile.y, self.rows) {
            for column in span(region.top_left.x, region.bottom_right.x, tile.x, self.columns) {
                let id = self.tiles[row * self.columns + column];
                if id == 0 {
                    continue;
                }
                let world = Vec2::new(column as f32 * tile.x, row as f32 * tile.y);
                draw_list.push(DrawCommand::Tile {
                    tile: TileId(id),
                    position: anchor + world.component_mul(&layer_scale),
                    size,
                });
            }
        }
    }
}

/// Background star drawn as a single sprite
struct Star {
    sprite: SpriteId,
    position: Vec2,
}

impl Entity for Star {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn draw(&self, screen_position: Vec2, scale: Vec2, draw_list: &mut DrawList) {
        draw_list.push(DrawCommand::Sprite {
            sprite: self.sprite,
            position: screen_position,
            scale,
        });
    }
}

fn load_config() -> Result<StackConfig, ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading stack config from {}", path);
            StackConfig::load_from_file(&path)?
        }
        None => StackConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

#[allow(clippy::cast_precision_loss)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("info");
    log::info!("Starting parallax demo");

    let config = load_config()?;
    let screen = config.screen;
    log::info!("Screen {}x{}, layer defaults {:?}", screen.width, screen.height, config.layer_defaults);

    let mut rng = thread_rng();
    let stars: Vec<Star> = (0..STAR_COUNT)
        .map(|i| Star {
            sprite: SpriteId((i % 4) as u32),
            position: Vec2::new(
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-(screen.height as f32) / 2.0..screen.height as f32 / 2.0),
            ),
        })
        .collect();
    let ground = Grid::ground(
        128,
        12,
        TileSheet {
            tile_width: 32,
            tile_height: 32,
        },
    );
    let hud = |offset: Vec2, scale: Vec2| {
        log::debug!("HUD: offset ({:.1}, {:.1}) scale ({}, {})", offset.x, offset.y, scale.x, scale.y);
    };

    let mut layers = LayerList::from_config(&config);
    let star_layer = layers.add_entity_layer(&stars);
    let ground_layer = layers.add_tilemap_layer(&ground);
    let hud_layer = layers.add_custom_layer(&hud);

    if let Some(layer) = layers.layer_mut(star_layer) {
        layer.set_scroll_speed(0.25, 0.25);
    }
    if let Some(layer) = layers.layer_mut(hud_layer) {
        layer.set_scroll_speed(0.0, 0.0);
    }
    log::info!(
        "Stack: {} layers, ground at index {}",
        layers.num_layers(),
        layers.index_of_layer(ground_layer)?
    );

    let mut draw_list = DrawList::with_capacity(256);
    for frame in 0..FRAMES {
        layers.scroll_camera(frame as f32 * CAMERA_STEP, 0.0);
        draw_list.clear();
        layers.draw(screen, &mut draw_list);

        let sprites = draw_list.iter().filter(|c| matches!(c, DrawCommand::Sprite { .. })).count();
        let tiles = draw_list.len() - sprites;
        log::info!(
            "Frame {}: camera ({:.0}, {:.0}) -> {} sprite(s), {} tile(s)",
            frame,
            layers.camera_pos().x,
            layers.camera_pos().y,
            sprites,
            tiles
        );
    }

    let mut cursor = layers.cursor();
    while let Some(current) = cursor {
        let layer = current.get();
        log::info!(
            "Layer {:?}: {:?}, offset ({:.1}, {:.1})",
            current.id(),
            layer.layer_type(),
            layer.scroll_offset().x,
            layer.scroll_offset().y
        );
        cursor = current.next();
    }

    Ok(())
}
