//! # Python Bindings
//!
//! PyO3 bindings for the questionnaire, so a Python host can drive it.
//!
//! ## Python API
//!
//! ```python
//! from team_affinity import Questionnaire
//!
//! q = Questionnaire.seeded(42)      # or Questionnaire() for thread RNG
//! q.submit_city("Chennai")
//! q.submit_color("yellow")
//! q.submit_style("balanced")
//!
//! print(q.score, q.assigned_team)   # 6 CSK
//! print(q.finalize("ravi"))         # ("ravi", "CSK")
//!
//! # Park the session between requests
//! blob = q.to_json()
//! q = Questionnaire.from_json(blob, seed=42)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::adapters::random::{SeededRandom, ThreadRandom};
use crate::core::{AffinityConfig, AffinityError, QuestionnaireSession, TeamCatalog};
use crate::engine::AffinityEngine;
use crate::ports::Randomness;

fn to_py_err(e: AffinityError) -> PyErr {
    PyValueError::new_err(format!("{}", e))
}

/// Engine over the built-in catalog; seeded when `seed` is given
fn build_engine(seed: Option<u64>) -> PyResult<AffinityEngine> {
    let rng: Box<dyn Randomness> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    AffinityEngine::with_adapters(TeamCatalog::ipl(), AffinityConfig::default(), rng)
        .map_err(|e| PyValueError::new_err(format!("{}", e)))
}

/// One questionnaire run over the built-in catalog
#[pyclass(name = "Questionnaire", unsendable)]
pub struct PyQuestionnaire {
    engine: AffinityEngine,
    session: QuestionnaireSession,
}

#[pymethods]
impl PyQuestionnaire {
    /// Start a questionnaire using the thread-local generator
    #[new]
    fn new() -> Self {
        let engine = AffinityEngine::new(TeamCatalog::ipl());
        let session = engine.start();
        Self { engine, session }
    }

    /// Start a questionnaire with a reproducible fallback draw
    ///
    /// Args:
    ///     seed: Seed for the random fallback
    #[staticmethod]
    fn seeded(seed: u64) -> PyResult<Self> {
        let engine = build_engine(Some(seed))?;
        let session = engine.start();
        Ok(Self { engine, session })
    }

    /// Resume a session previously exported with `to_json`
    ///
    /// Args:
    ///     data: JSON from `to_json`
    ///     seed: Optional seed, to keep a seeded run reproducible
    #[staticmethod]
    #[pyo3(signature = (data, seed=None))]
    fn from_json(data: &str, seed: Option<u64>) -> PyResult<Self> {
        let session: QuestionnaireSession = serde_json::from_str(data)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        let engine = build_engine(seed)?;
        Ok(Self { engine, session })
    }

    fn submit_city(&mut self, city: &str) -> PyResult<()> {
        self.session = self.engine.submit_city(&self.session, city).map_err(to_py_err)?;
        Ok(())
    }

    fn submit_color(&mut self, color: &str) -> PyResult<()> {
        self.session = self.engine.submit_color(&self.session, color).map_err(to_py_err)?;
        Ok(())
    }

    /// Args:
    ///     style: "balanced" or "aggressive"
    fn submit_style(&mut self, style: &str) -> PyResult<()> {
        self.session = self.engine.submit_style(&self.session, style).map_err(to_py_err)?;
        Ok(())
    }

    /// Returns:
    ///     (str, str): username and assigned team code
    fn finalize(&self, username: &str) -> PyResult<(String, String)> {
        let assignment = self.engine.finalize(&self.session, username).map_err(to_py_err)?;
        Ok((assignment.username, assignment.team.to_string()))
    }

    /// Discard progress and begin again at step 1
    fn restart(&mut self) {
        self.session = self.engine.start();
    }

    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.session).map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    #[getter]
    fn step(&self) -> u8 {
        self.session.step().ordinal()
    }

    #[getter]
    fn score(&self) -> i32 {
        self.session.score()
    }

    #[getter]
    fn assigned_team(&self) -> Option<String> {
        self.session.assigned_team().map(|t| t.to_string())
    }

    /// Cities offered at step 1
    #[staticmethod]
    fn cities() -> Vec<String> {
        TeamCatalog::ipl().cities().map(String::from).collect()
    }

    /// Colors offered at step 2
    #[staticmethod]
    fn colors() -> Vec<&'static str> {
        TeamCatalog::ipl().offered_colors().to_vec()
    }

    fn __repr__(&self) -> String {
        format!(
            "Questionnaire(step={}, score={}, team={:?})",
            self.session.step().ordinal(),
            self.session.score(),
            self.session.assigned_team().map(|t| t.as_str())
        )
    }
}

/// Team Affinity Python module
#[pymodule]
fn team_affinity(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyQuestionnaire>()?;

    m.add("__doc__", "Team Affinity: questionnaire-driven team assignment")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
