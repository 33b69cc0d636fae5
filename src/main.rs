use flyweight_maze::{Block, Config, Container, Direction, Edit, EditLog, Palette};
use std::sync::Arc;

/// Build a block with a wall border and a floor center, then print it
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let palette = Palette::from_config(&config.glyphs);
    let mut log = EditLog::new();

    let mut block = Block::new();
    block.set_position(config.block.x, config.block.y);
    log.log(Edit::SetPosition {
        x: config.block.x,
        y: config.block.y,
    });

    for direction in Direction::ALL {
        let element = if direction == Direction::Center {
            Arc::clone(&palette.floor)
        } else {
            Arc::clone(&palette.wall)
        };
        let name = element.name().to_string();
        block.set_container(Container::new(direction, element));
        log.log(Edit::SetContainer {
            direction,
            element: name,
        });
    }

    for line in block.render_with(&config.render.separator, config.render.trailing_separator) {
        println!("{}", line);
    }

    if config.logging.enable_edit_log {
        log.print();
        eprintln!("{}", log.summary());
        eprintln!("{}", log.to_json()?);
    }

    Ok(())
}
