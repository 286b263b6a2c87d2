use crate::entities::{CapabilityDefinition, CapabilityId};
use crate::error::{CatalogError, ResolveError};
use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, Reversed};
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap};

/// Prerequisite relation between capabilities.
///
/// "B requires A" is stored as the edge A -> B, so a topological walk yields
/// prerequisites before the capabilities that need them. Nodes are inserted
/// in catalog order, which makes `NodeIndex::index()` the catalog position.
#[derive(Debug, Clone)]
pub struct PrerequisiteGraph {
    graph: DiGraph<CapabilityId, ()>,
    node_map: HashMap<CapabilityId, NodeIndex>,
}

impl PrerequisiteGraph {
    /// Build the graph and reject it if it contains a cycle.
    /// All prerequisite IDs must already be known to exist.
    pub fn build(capabilities: &[CapabilityDefinition]) -> Result<Self, CatalogError> {
        let mut graph = DiGraph::with_capacity(capabilities.len(), capabilities.len() * 2);
        let mut node_map = HashMap::with_capacity(capabilities.len());

        for cap in capabilities {
            let idx = graph.add_node(cap.id.clone());
            node_map.insert(cap.id.clone(), idx);
        }

        for cap in capabilities {
            let to = node_map[&cap.id];
            for prerequisite in &cap.prerequisites {
                let Some(&from) = node_map.get(prerequisite) else {
                    return Err(CatalogError::DanglingPrerequisite {
                        capability: cap.id.clone(),
                        prerequisite: prerequisite.clone(),
                    });
                };
                if from == to {
                    return Err(CatalogError::SelfPrerequisite(cap.id.clone()));
                }
                // Avoid duplicate edges
                if graph.find_edge(from, to).is_none() {
                    graph.add_edge(from, to, ());
                }
            }
        }

        let built = Self { graph, node_map };
        built.ensure_acyclic()?;
        Ok(built)
    }

    fn ensure_acyclic(&self) -> Result<(), CatalogError> {
        if toposort(&self.graph, None).is_ok() {
            return Ok(());
        }

        // Report the strongly connected component that forms the cycle,
        // members in catalog order.
        let mut cycle: Vec<NodeIndex> = tarjan_scc(&self.graph)
            .into_iter()
            .find(|component| component.len() > 1)
            .unwrap_or_default();
        cycle.sort_by_key(|idx| idx.index());

        let cycle: Vec<CapabilityId> = cycle.iter().map(|&idx| self.graph[idx].clone()).collect();
        let capability = cycle
            .first()
            .cloned()
            .unwrap_or_else(|| CapabilityId::new("<unknown>"));

        Err(CatalogError::CyclicPrerequisites { capability, cycle })
    }

    fn index_of(&self, id: &str) -> Result<NodeIndex, ResolveError> {
        self.node_map
            .get(id)
            .copied()
            .ok_or_else(|| ResolveError::UnknownCapability(CapabilityId::new(id)))
    }

    /// Capabilities that list `id` as a direct prerequisite, in catalog order.
    pub fn dependents(&self, id: &str) -> Result<Vec<CapabilityId>, ResolveError> {
        let idx = self.index_of(id)?;
        let mut dependents: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        dependents.sort_by_key(|n| n.index());
        Ok(dependents.into_iter().map(|n| self.graph[n].clone()).collect())
    }

    /// The given capabilities plus all of their transitive prerequisites.
    pub fn closure<'a, I>(&self, ids: I) -> Result<BTreeSet<CapabilityId>, ResolveError>
    where
        I: IntoIterator<Item = &'a CapabilityId>,
    {
        let reversed = Reversed(&self.graph);
        let mut closure = BTreeSet::new();

        for id in ids {
            let start = self.index_of(id.as_str())?;
            let mut dfs = Dfs::new(reversed, start);
            while let Some(node) = dfs.next(reversed) {
                closure.insert(self.graph[node].clone());
            }
        }

        Ok(closure)
    }

    /// Layers in which the given capabilities can be switched on.
    ///
    /// Every capability lands in a later layer than its prerequisites from
    /// the same set; prerequisites outside the set are ignored. Each layer is
    /// in catalog order.
    pub fn activation_order<'a, I>(&self, ids: I) -> Result<Vec<Vec<CapabilityId>>, ResolveError>
    where
        I: IntoIterator<Item = &'a CapabilityId>,
    {
        let mut in_degrees: HashMap<NodeIndex, usize> = HashMap::new();
        for id in ids {
            in_degrees.insert(self.index_of(id.as_str())?, 0);
        }

        let members: Vec<NodeIndex> = in_degrees.keys().copied().collect();
        for &node in &members {
            let degree = self
                .graph
                .neighbors_directed(node, Direction::Incoming)
                .filter(|n| in_degrees.contains_key(n))
                .count();
            in_degrees.insert(node, degree);
        }

        let mut batches = Vec::new();
        while !in_degrees.is_empty() {
            let mut current_batch: Vec<NodeIndex> = in_degrees
                .iter()
                .filter(|(_, &deg)| deg == 0)
                .map(|(&idx, _)| idx)
                .collect();

            // The graph is acyclic, so a non-empty remainder always has a root.
            if current_batch.is_empty() {
                break;
            }
            current_batch.sort_by_key(|idx| idx.index());

            for &node_idx in &current_batch {
                for neighbor in self.graph.neighbors_directed(node_idx, Direction::Outgoing) {
                    if let Some(deg) = in_degrees.get_mut(&neighbor) {
                        *deg -= 1;
                    }
                }
                in_degrees.remove(&node_idx);
            }

            batches.push(
                current_batch
                    .into_iter()
                    .map(|idx| self.graph[idx].clone())
                    .collect(),
            );
        }

        Ok(batches)
    }
}
