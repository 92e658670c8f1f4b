use std::time::Instant;

use log::{info, trace, warn};

use crate::error::{NnError, Result};
use crate::loss::loss_fn::Loss;
use crate::math::tensor::{argmax_rows, Tensor};
use crate::network::network::Network;
use crate::optim::optimizer::Optimizer;
use crate::train::{epoch_stats::EpochStats, train_config::TrainConfig};

/// Trains `network` on the whole batch for exactly `config.epochs` epochs.
///
/// Each epoch is one forward pass over all of `inputs`, the loss and its
/// gradient against `targets`, one backward pass and one optimizer step.
/// Returns one `EpochStats` per epoch.
pub fn train(
    network: &mut Network,
    inputs: &Tensor,
    targets: &Tensor,
    loss: &dyn Loss,
    optimizer: &dyn Optimizer,
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    check_dataset(inputs, targets)?;
    if config.epochs == 0 {
        warn!("training requested with 0 epochs; network left unchanged");
    }
    info!(
        "training {} epochs on {} samples ({} features -> {} targets)",
        config.epochs,
        inputs.nrows(),
        inputs.ncols(),
        targets.ncols()
    );

    let started = Instant::now();
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let predicted = network.forward(inputs.clone())?;
        let epoch_loss = loss.loss(&predicted, targets)?;
        let grad = loss.grad(&predicted, targets)?;
        network.backward(grad)?;
        optimizer.step(network);

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            loss: epoch_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if config.log_every > 0 && (epoch % config.log_every == 0 || epoch == config.epochs) {
            info!("epoch {epoch}/{}: loss = {epoch_loss:.6}", config.epochs);
        } else {
            trace!("epoch {epoch}/{}: loss = {epoch_loss:.6}", config.epochs);
        }
        history.push(stats);
    }

    info!("training finished in {:.2?}", started.elapsed());
    Ok(history)
}

/// Fraction of rows whose highest output matches the highest target.
pub fn accuracy(network: &mut Network, inputs: &Tensor, targets: &Tensor) -> Result<f64> {
    check_dataset(inputs, targets)?;
    let predicted = network.forward(inputs.clone())?;
    let correct = argmax_rows(&predicted)
        .into_iter()
        .zip(argmax_rows(targets))
        .filter(|(p, t)| p == t)
        .count();
    Ok(correct as f64 / inputs.nrows() as f64)
}

fn check_dataset(inputs: &Tensor, targets: &Tensor) -> Result<()> {
    if inputs.nrows() == 0 {
        return Err(NnError::InvalidConfig("dataset has no samples".into()));
    }
    if inputs.nrows() != targets.nrows() {
        return Err(NnError::InvalidConfig(format!(
            "{} input rows but {} target rows",
            inputs.nrows(),
            targets.nrows()
        )));
    }
    Ok(())
}
