//! Closed set of pricing engines.
//!
//! [`PricingEngine`] lets callers hold heterogeneous methods in one `Vec`
//! and dispatch statically through [`PricingMethod`].

use pricer_core::market_data::MarketEnvironment;
use pricer_models::instruments::OptionContract;

use crate::analytical::ClosedFormPricer;
use crate::lattice::BinomialTree;
use crate::mc::MonteCarloPricer;
use crate::method::{MethodKind, PricingMethod, PricingResult};

/// One of the three supported pricing methods.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketEnvironment;
/// use pricer_models::instruments::{OptionContract, OptionType};
/// use pricer_pricing::engine::PricingEngine;
/// use pricer_pricing::lattice::{BinomialTree, LatticeConfig};
/// use pricer_pricing::method::{MethodKind, PricingMethod};
///
/// let engines = vec![
///     PricingEngine::ClosedForm(Default::default()),
///     PricingEngine::Lattice(BinomialTree::new(LatticeConfig::new(200).unwrap())),
/// ];
///
/// let contract = OptionContract::new(100.0, 95.0, 0.5, OptionType::Put).unwrap();
/// let market = MarketEnvironment::new(0.02, 0.3).unwrap();
///
/// let kinds: Vec<MethodKind> = engines.iter().map(|e| e.price(&contract, &market).method).collect();
/// assert_eq!(kinds, vec![MethodKind::ClosedForm, MethodKind::Lattice]);
/// ```
#[derive(Clone, Debug)]
pub enum PricingEngine {
    /// Black-Scholes-Merton closed form.
    ClosedForm(ClosedFormPricer),
    /// Binomial lattice.
    Lattice(BinomialTree),
    /// Monte Carlo simulation.
    MonteCarlo(MonteCarloPricer),
}

impl PricingMethod for PricingEngine {
    fn kind(&self) -> MethodKind {
        match self {
            PricingEngine::ClosedForm(engine) => engine.kind(),
            PricingEngine::Lattice(engine) => engine.kind(),
            PricingEngine::MonteCarlo(engine) => engine.kind(),
        }
    }

    fn price(&self, contract: &OptionContract, market: &MarketEnvironment) -> PricingResult {
        match self {
            PricingEngine::ClosedForm(engine) => engine.price(contract, market),
            PricingEngine::Lattice(engine) => engine.price(contract, market),
            PricingEngine::MonteCarlo(engine) => engine.price(contract, market),
        }
    }
}

impl From<ClosedFormPricer> for PricingEngine {
    fn from(engine: ClosedFormPricer) -> Self {
        PricingEngine::ClosedForm(engine)
    }
}

impl From<BinomialTree> for PricingEngine {
    fn from(engine: BinomialTree) -> Self {
        PricingEngine::Lattice(engine)
    }
}

impl From<MonteCarloPricer> for PricingEngine {
    fn from(engine: MonteCarloPricer) -> Self {
        PricingEngine::MonteCarlo(engine)
    }
}
