//! The Kuhn Poker engine.

use tracing::trace;

use crate::core::{
    Action, ConfigError, Deal, GameRng, GameRngState, KuhnConfig, KuhnError, PlayerId, PlayerMap,
};
use crate::rules::Payoff;

use super::state::{ActionOutcome, HandState};

/// Rules referee for one hand at a time.
///
/// Owns its RNG, so two engines never share randomness. The engine does not
/// check who is calling: callers consult [`current_player`](Self::current_player)
/// before acting.
#[derive(Clone, Debug)]
pub struct KuhnPoker {
    config: KuhnConfig,
    rng: GameRng,
    hand: HandState,
}

impl KuhnPoker {
    /// Create an engine and deal the first hand.
    ///
    /// Fails if the stakes are not positive or a full pot would overflow.
    pub fn new(config: KuhnConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self::with_rng(config, rng))
    }

    /// Create an engine with the standard stakes and the given seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(KuhnConfig::default().with_seed(seed), GameRng::new(seed))
    }

    /// `config` must be valid.
    fn with_rng(config: KuhnConfig, mut rng: GameRng) -> Self {
        let hand = HandState::new(rng.deal(), config.ante, config.bet_size);
        Self { config, rng, hand }
    }

    /// Create an independent engine with a forked deal stream.
    #[must_use]
    pub fn spawn(&mut self) -> Self {
        let rng = self.rng.fork();
        Self::with_rng(self.config.clone(), rng)
    }

    /// Shuffle, deal a fresh hand and discard everything from the last one.
    pub fn reset(&mut self) -> Deal {
        let deal = self.rng.deal();
        self.reset_with(deal);
        deal
    }

    /// Start a fresh hand with a chosen deal. Does not consume randomness.
    pub fn reset_with(&mut self, deal: Deal) {
        trace!(%deal, "dealing hand");
        self.hand = HandState::new(deal, self.config.ante, self.config.bet_size);
    }

    /// Legal actions: empty once the hand is over, otherwise PASS and BET.
    #[must_use]
    pub fn valid_actions(&self) -> Vec<Action> {
        self.hand.valid_actions()
    }

    /// Apply an action for the player to act.
    ///
    /// Fails with `IllegalState` if the hand is already over. A rejected call
    /// changes nothing.
    pub fn apply_action(&mut self, action: Action) -> Result<ActionOutcome, KuhnError> {
        let outcome = self.hand.apply(action)?;
        trace!(
            history = %self.hand.history_string(),
            terminal = outcome.terminal,
            "applied {action}"
        );
        Ok(outcome)
    }

    /// Apply an action given as an agent index (0=PASS, 1=BET).
    ///
    /// A terminal hand is reported as `IllegalState` before the index is
    /// looked at; an unknown index is `InvalidAction`.
    pub fn apply_index(&mut self, index: i64) -> Result<ActionOutcome, KuhnError> {
        self.ensure_live()?;
        self.apply_action(Action::try_from(index)?)
    }

    /// Apply an action given as a symbol or name (`p`, `b`, `pass`, `bet`).
    pub fn apply_symbol(&mut self, symbol: &str) -> Result<ActionOutcome, KuhnError> {
        self.ensure_live()?;
        self.apply_action(symbol.parse()?)
    }

    fn ensure_live(&self) -> Result<(), KuhnError> {
        if self.hand.is_terminal() {
            return Err(KuhnError::illegal_state(self.hand.history_string()));
        }
        Ok(())
    }

    /// A player's view: own card and the public history, e.g. `K-pb`.
    #[must_use]
    pub fn info_set(&self, player: PlayerId) -> String {
        self.hand.info_set(player)
    }

    /// Player to act, or `None` once the hand is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.hand.current_player()
    }

    /// History rendered as symbols, e.g. `pb`.
    #[must_use]
    pub fn history_string(&self) -> String {
        self.hand.history_string()
    }

    #[must_use]
    pub fn history(&self) -> &[Action] {
        self.hand.history()
    }

    #[must_use]
    pub fn deal(&self) -> Deal {
        self.hand.deal()
    }

    #[must_use]
    pub fn pot(&self) -> &PlayerMap<i32> {
        self.hand.pot()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.hand.is_terminal()
    }

    #[must_use]
    pub fn payoff(&self) -> Option<Payoff> {
        self.hand.payoff()
    }

    /// The hand in progress.
    #[must_use]
    pub fn state(&self) -> &HandState {
        &self.hand
    }

    #[must_use]
    pub fn config(&self) -> &KuhnConfig {
        &self.config
    }

    /// Position in the deal stream, for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume from a checkpointed hand and deal stream.
    ///
    /// The hand keeps the stakes it was dealt with; `config` applies from the
    /// next reset.
    pub fn restore(
        config: KuhnConfig,
        hand: HandState,
        rng: &GameRngState,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: GameRng::from_state(rng),
            hand,
        })
    }
}
