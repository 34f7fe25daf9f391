use direction::CardinalDirection;
use entity_table::{Entity, EntityAllocator};
use object_map::ObjectMap;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_isaac::Isaac64Rng;

const DIRECTIONS: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::East,
    CardinalDirection::South,
    CardinalDirection::West,
];

struct Args {
    width: u32,
    height: u32,
    num_objects: usize,
    steps: usize,
    rng_seed: u64,
}

impl Args {
    fn parser() -> impl meap::Parser<Item = Self> {
        meap::let_map! {
            let {
                rng_seed = opt_opt::<u64, _>("INT", 'r').name("rng-seed").desc("rng seed")
                    .with_default_lazy_general(|| rand::thread_rng().gen());
                width = opt_opt::<u32, _>("INT", 'x').name("width").with_default(20);
                height = opt_opt::<u32, _>("INT", 'y').name("height").with_default(14);
                num_objects = opt_opt("INT", 'n').name("num-objects")
                    .desc("number of objects to scatter over the map").with_default(8);
                steps = opt_opt("INT", 's').name("steps")
                    .desc("number of random steps to take").with_default(10);
            } in {
                Self {
                    width,
                    height,
                    num_objects,
                    steps,
                    rng_seed,
                }
            }
        }
    }
}

fn cell_char(count: usize) -> char {
    match count {
        0 => '.',
        1..=9 => char::from(b'0' + count as u8),
        _ => '+',
    }
}

fn print_map(map: &ObjectMap<Entity>) {
    for row in 0..map.rows() {
        let line = (0..map.columns())
            .map(|column| cell_char(map.at(column, row).map_or(0, <[_]>::len)))
            .collect::<String>();
        println!("{}", line);
    }
    println!();
}

/// Moves every object one step in a random direction. Moves off the edge
/// of the map are rejected by the map and the object stays put.
fn step<R: Rng>(map: &mut ObjectMap<Entity>, entities: &[Entity], rng: &mut R) {
    for &entity in entities {
        if let Some(&direction) = DIRECTIONS.choose(rng) {
            if let Err(e) = map.move_in_direction(entity, direction) {
                log::debug!("{:?} can't move {:?}: {}", entity, direction, e);
            }
        }
    }
}

fn main() {
    use meap::Parser;
    env_logger::init();
    let Args {
        width,
        height,
        num_objects,
        steps,
        rng_seed,
    } = Args::parser().with_help_default().parse_env_or_exit();
    log::info!("RNG Seed: {}", rng_seed);
    let mut rng = Isaac64Rng::seed_from_u64(rng_seed);
    let mut map = match ObjectMap::new(width, height) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let mut entity_allocator = EntityAllocator::default();
    let mut entities = Vec::with_capacity(num_objects);
    for _ in 0..num_objects {
        let entity = entity_allocator.alloc();
        let column = rng.gen_range(0..map.columns());
        let row = rng.gen_range(0..map.rows());
        match map.add(entity, column, row) {
            Ok(()) => entities.push(entity),
            Err(e) => log::warn!("failed to add {:?}: {}", entity, e),
        }
    }
    print_map(&map);
    for _ in 0..steps {
        step(&mut map, &entities, &mut rng);
        print_map(&map);
    }
    for (cell, objects) in map.occupied_cells() {
        log::info!("({}, {}): {:?}", cell.column, cell.row, objects);
    }
}
