use std::io::{Error, ErrorKind, Write};
use rand_cbrng::*;

// Writes a raw little-endian byte stream to stdout for statistical test batteries, e.g.
//
//   rand_cbrng 200 0 42 | RNG_test stdin32
//
// The stream is laid out the way a simulation consumes the generator: one generator
// per particle tag, each drawing `draws_per_stream` blocks, tags counting up from 0.
// Set RUST_LOG=debug to follow the tags.

const USAGE: &str = "usage: rand_cbrng <class_id> <timestep> <seed> [draws_per_stream]";

fn argument<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> std::io::Result<T> {
    let text = args.get(index).ok_or_else(|| Error::new(ErrorKind::InvalidInput, USAGE))?;
    text.parse().map_err(|_| Error::new(ErrorKind::InvalidInput, format!("invalid {}: {}", name, text)))
}

fn run(args: &[String]) -> std::io::Result<()> {
    let class_id: u8 = argument(args, 1, "class_id")?;
    let timestep: u64 = argument(args, 2, "timestep")?;
    let user_seed: u16 = argument(args, 3, "seed")?;
    let draws_per_stream: u64 = if args.len() > 4 { argument(args, 4, "draws_per_stream")? } else { 1 << 16 };
    if draws_per_stream == 0 || draws_per_stream > 1 << 32 {
        return Err(Error::new(ErrorKind::InvalidInput, "draws_per_stream must be in 1 ..= 2^32"));
    }

    let seed = Seed::new(class_id, timestep, user_seed);
    log::info!("class id {} timestep {} seed {} key {:08x?}, {} blocks per stream",
        class_id, timestep, user_seed, seed.key(), draws_per_stream);

    let mut stdout = std::io::stdout().lock();
    let mut v: Vec<u8> = Vec::with_capacity(0x10000);

    for tag in 0 ..= u32::MAX {
        log::debug!("particle tag {}", tag);
        let mut rng = Generator::new(&seed, &Counter::from(tag));
        for _ in 0 .. draws_per_stream {
            v.extend_from_slice(&rng.draw().to_le_bytes());
            if v.len() >= 0x10000 {
                stdout.write_all(v.as_slice())?;
                v.clear();
            }
        }
    }
    stdout.write_all(v.as_slice())?;
    stdout.flush()
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        // A closed pipe means the consumer has seen enough.
        Err(error) if error.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(error) => {
            log::error!("{}", error);
            Err(error)
        }
        Ok(()) => Ok(()),
    }
}
