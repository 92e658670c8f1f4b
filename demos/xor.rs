use backprop_nn::{Activation, Linear, Network, Sgd, SumSquaredError, TrainConfig, train};
use ndarray::array;
use rand::{rngs::StdRng, SeedableRng};

fn main() -> backprop_nn::Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(1);
    let mut network = Network::new(vec![
        Box::new(Linear::new(2, 4, &mut rng)),
        Box::new(Activation::tanh()),
        Box::new(Linear::new(4, 1, &mut rng)),
    ]);

    let inputs = array![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];
    let expected_outputs = array![[1.0], [0.0], [1.0], [0.0]];

    let config = TrainConfig { log_every: 1000, ..TrainConfig::new(10000) };
    let history = train(
        &mut network,
        &inputs,
        &expected_outputs,
        &SumSquaredError,
        &Sgd::new(0.01),
        &config,
    )?;

    for stats in history.iter().step_by(1000) {
        println!("Epoch {}: loss = {:.6}", stats.epoch, stats.loss);
    }

    let outputs = network.forward(inputs.clone())?;
    for (input, output) in inputs.rows().into_iter().zip(outputs.rows()) {
        println!("Input: {:?} -> Output: {:.4}", input.to_vec(), output[0]);
    }
    Ok(())
}
