// Trains the FizzBuzz network and prints its predictions for 1..=100.
//
//   backprop-nn [train-config.json] [history-out.json]
//
// Set RUST_LOG=info to see the training loss.
use std::process::ExitCode;

use backprop_nn::data::fizzbuzz::{self, dataset, label};
use backprop_nn::math::tensor::argmax_rows;
use backprop_nn::{accuracy, train, Network, NetworkSpec, Result, TrainConfig};
use log::error;
use rand::{rngs::StdRng, SeedableRng};

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => TrainConfig::from_json_file(&path)?,
        None => TrainConfig::default(),
    };
    let history_path = args.next();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut network = Network::from_spec(&NetworkSpec::fizzbuzz(), &mut rng)?;

    let (train_x, train_y) = dataset(101..=1023);
    let history = train(
        &mut network,
        &train_x,
        &train_y,
        config.loss.build().as_ref(),
        &config.optimizer(),
        &config,
    )?;

    if let Some(path) = history_path {
        let file = std::fs::File::create(&path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &history)?;
    }

    let (test_x, test_y) = dataset(1..=100);
    let predicted = argmax_rows(&network.forward(test_x.clone())?);
    let actual = argmax_rows(&test_y);
    for (x, (p, a)) in (1..=100u32).zip(predicted.into_iter().zip(actual)) {
        println!("{x} {} {}", label(x, p), label(x, a));
    }

    let acc = accuracy(&mut network, &test_x, &test_y)?;
    println!(
        "accuracy on 1..=100: {:.1}% ({} classes)",
        acc * 100.0,
        fizzbuzz::NUM_CLASSES
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
