// foundry-core/src/domain/pipeline/solver.rs

use crate::domain::error::DomainError;
use crate::domain::pipeline::step::BuildStep;
use std::collections::{HashMap, HashSet, VecDeque};

pub struct PlanSolver;

impl PlanSolver {
    /// Calculates the execution order of build steps (Topological Sort with Layers).
    /// Returns a list of layers, where each layer contains steps that can run in parallel.
    /// Layer N depends only on layers 0..N-1 through `wait_for` edges.
    pub fn plan_execution(steps: &[BuildStep]) -> Result<Vec<Vec<String>>, DomainError> {
        let known: HashSet<&str> = steps.iter().map(|s| s.id.as_str()).collect();

        let mut in_degree: HashMap<&str, usize> = HashMap::new();
        let mut adj_list: HashMap<&str, Vec<&str>> = HashMap::new();

        for step in steps {
            in_degree.insert(&step.id, 0);
            adj_list.insert(&step.id, Vec::new());
        }

        // Graph construction: an edge from each awaited step to its waiter.
        for step in steps {
            for dep in &step.wait_for {
                if !known.contains(dep.as_str()) {
                    return Err(DomainError::UnknownStep {
                        step: step.id.clone(),
                        dependency: dep.clone(),
                    });
                }
                adj_list.entry(dep.as_str()).or_default().push(&step.id);
                *in_degree.entry(&step.id).or_insert(0) += 1;
            }
        }

        // Kahn's algorithm, layered. Iterating `steps` (not the maps) keeps
        // layer contents in declaration order.
        let mut queue: VecDeque<&str> = steps
            .iter()
            .filter(|s| in_degree.get(s.id.as_str()) == Some(&0))
            .map(|s| s.id.as_str())
            .collect();

        let mut layers: Vec<Vec<String>> = Vec::new();
        let mut total_resolved = 0;

        while !queue.is_empty() {
            let mut current_layer = Vec::new();
            let layer_size = queue.len();

            for _ in 0..layer_size {
                if let Some(current) = queue.pop_front() {
                    current_layer.push(current.to_string());
                    total_resolved += 1;

                    if let Some(waiters) = adj_list.get(current) {
                        for waiter in waiters {
                            if let Some(degree) = in_degree.get_mut(waiter) {
                                *degree -= 1;
                                if *degree == 0 {
                                    queue.push_back(waiter);
                                }
                            }
                        }
                    }
                }
            }
            layers.push(current_layer);
        }

        if total_resolved != steps.len() {
            return Err(DomainError::CircularDependency(format!(
                "Resolved {}/{} steps.",
                total_resolved,
                steps.len()
            )));
        }

        Ok(layers)
    }
}
