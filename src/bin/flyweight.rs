//! Walk through the wall flyweight: direct lookups on the shared element,
//! then the same glyphs reached through containers.

use flyweight_maze::{Container, Direction, BLOCK_SIZE, WALL};

fn main() {
    println!("NORTH glyph of the wall element:");
    println!("{}", WALL.repr(Direction::North));
    println!();

    println!("Every glyph of the wall element:");
    for row in Direction::ALL.chunks(BLOCK_SIZE) {
        let glyphs: Vec<&str> = row.iter().map(|&d| WALL.repr(d)).collect();
        println!("{}", glyphs.join(" "));
    }
    println!();

    let wall = Container::wall(Direction::North);
    println!("NORTH glyph through a wall container:");
    println!("{}", wall.repr());
    println!();

    // Nine containers, one shared element
    let matrix: Vec<Vec<Container>> = Direction::ALL
        .chunks(BLOCK_SIZE)
        .map(|row| row.iter().map(|&d| Container::wall(d)).collect())
        .collect();

    println!("Matrix of wall containers:");
    for row in &matrix {
        let glyphs: Vec<&str> = row.iter().map(Container::repr).collect();
        println!("{}", glyphs.join(" "));
    }
}
