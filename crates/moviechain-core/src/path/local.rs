//! In-memory bounded traversal over a movie–actor adjacency.
//!
//! The graph store answers bounded path queries natively; this engine
//! provides the same semantics over credit pairs held in memory, for
//! offline use against chunk partitions and for exercising the
//! traversal contract without a running store.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::movie::model::{Actor, Movie, MovieSummary};
use crate::path::model::{dedup_paths, PathEntity, PathRecord};
use crate::path::validate_max_hops;
use crate::ChainResult;

#[derive(Debug, Clone, Copy)]
enum Node {
    Movie(usize),
    Actor(usize),
}

/// Movie–actor adjacency with credit edges.
///
/// Slots index into `movies`/`actors`; each credit is one undirected
/// edge between a movie slot and an actor slot, deduplicated on the
/// (movie, actor) pair exactly like the store's MERGE.
#[derive(Debug, Default)]
pub struct LocalGraph {
    movies: Vec<Movie>,
    actors: Vec<String>,
    edges: Vec<(usize, usize)>,
    movie_adj: Vec<Vec<usize>>,
    actor_adj: Vec<Vec<usize>>,
    movie_slots: HashMap<i64, usize>,
    actor_slots: HashMap<String, usize>,
    by_title: HashMap<String, Vec<usize>>,
    edge_set: HashSet<(usize, usize)>,
}

impl LocalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn credit_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert or update a movie node.
    pub fn add_movie(&mut self, movie: Movie) {
        if let Some(&slot) = self.movie_slots.get(&movie.id) {
            self.movies[slot] = movie;
            return;
        }
        let slot = self.movies.len();
        self.movie_slots.insert(movie.id, slot);
        self.by_title
            .entry(movie.title.clone())
            .or_default()
            .push(slot);
        self.movies.push(movie);
        self.movie_adj.push(Vec::new());
    }

    /// Record a credit edge between a known movie and an actor name.
    ///
    /// Unknown movies and blank names are skipped; repeated
    /// (movie, actor) pairs collapse into a single edge.
    pub fn add_credit(&mut self, movie_id: i64, actor_name: &str) {
        let key = Actor::key(actor_name);
        if key.is_empty() {
            return;
        }
        let Some(&movie_slot) = self.movie_slots.get(&movie_id) else {
            debug!(movie_id, "credit references a movie that was never added");
            return;
        };

        let actor_slot = match self.actor_slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.actors.len();
                self.actor_slots.insert(key.clone(), slot);
                self.actors.push(key);
                self.actor_adj.push(Vec::new());
                slot
            }
        };

        if !self.edge_set.insert((movie_slot, actor_slot)) {
            return;
        }
        let edge = self.edges.len();
        self.edges.push((movie_slot, actor_slot));
        self.movie_adj[movie_slot].push(edge);
        self.actor_adj[actor_slot].push(edge);
    }

    /// All distinct paths of 1..=`max_hops` relationship hops starting
    /// from every movie whose title matches `title` exactly.
    ///
    /// No edge is traversed twice within one path; revisiting a node
    /// through a different edge is allowed. An unknown title yields an
    /// empty set, not an error.
    pub fn find_paths(
        &self,
        title: &str,
        max_hops: i64,
        limit: Option<usize>,
    ) -> ChainResult<Vec<PathRecord>> {
        let hops = validate_max_hops(max_hops)?;

        let Some(anchors) = self.by_title.get(title) else {
            return Ok(Vec::new());
        };

        let mut found = Vec::new();
        for &slot in anchors {
            let mut used = vec![false; self.edges.len()];
            let mut current = vec![self.entity(Node::Movie(slot))];
            self.expand(Node::Movie(slot), hops, &mut used, &mut current, &mut found);
        }

        let mut paths = dedup_paths(found);
        if let Some(cap) = limit {
            paths.truncate(cap);
        }
        Ok(paths)
    }

    /// Case-insensitive substring lookup over titles, most popular
    /// first, ties broken alphabetically. Mirrors the store-backed
    /// suggestion query for offline use.
    pub fn suggest(&self, fragment: &str, limit: usize) -> Vec<MovieSummary> {
        let needle = fragment.to_lowercase();
        let mut matches: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| {
            b.popularity
                .partial_cmp(&a.popularity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.title.cmp(&b.title))
        });
        matches
            .into_iter()
            .take(limit)
            .map(|m| MovieSummary {
                id: m.id,
                title: m.title.clone(),
                overview: m.overview.clone(),
                release_date: m.release_date.clone(),
            })
            .collect()
    }

    /// Depth-first expansion emitting every prefix as a path of its own.
    fn expand(
        &self,
        node: Node,
        remaining: u32,
        used: &mut [bool],
        current: &mut Vec<PathEntity>,
        out: &mut Vec<PathRecord>,
    ) {
        if remaining == 0 {
            return;
        }
        let adjacent = match node {
            Node::Movie(slot) => &self.movie_adj[slot],
            Node::Actor(slot) => &self.actor_adj[slot],
        };
        for &edge in adjacent {
            if used[edge] {
                continue;
            }
            let (movie_slot, actor_slot) = self.edges[edge];
            let next = match node {
                Node::Movie(_) => Node::Actor(actor_slot),
                Node::Actor(_) => Node::Movie(movie_slot),
            };
            used[edge] = true;
            current.push(self.entity(next));
            out.push(PathRecord::new(current.clone()));
            self.expand(next, remaining - 1, used, current, out);
            current.pop();
            used[edge] = false;
        }
    }

    fn entity(&self, node: Node) -> PathEntity {
        match node {
            Node::Movie(slot) => {
                let m = &self.movies[slot];
                PathEntity::Movie {
                    id: m.id,
                    title: m.title.clone(),
                    overview: m.overview.clone(),
                    release_date: m.release_date.clone(),
                }
            }
            Node::Actor(slot) => PathEntity::Actor {
                id: self.actors[slot].clone(),
                name: self.actors[slot].clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainError;

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: None,
            release_date: None,
            popularity: 0.0,
            genres: Vec::new(),
            poster_path: None,
        }
    }

    /// A – X – B – Y – C chain: one shared actor per adjacent pair.
    fn chain() -> LocalGraph {
        let mut g = LocalGraph::new();
        g.add_movie(movie(1, "A"));
        g.add_movie(movie(2, "B"));
        g.add_movie(movie(3, "C"));
        g.add_credit(1, "X");
        g.add_credit(2, "X");
        g.add_credit(2, "Y");
        g.add_credit(3, "Y");
        g
    }

    fn titles(path: &PathRecord) -> Vec<String> {
        path.entities
            .iter()
            .map(|e| match e {
                PathEntity::Movie { title, .. } => title.clone(),
                PathEntity::Actor { name, .. } => name.clone(),
            })
            .collect()
    }

    #[test]
    fn three_hop_bound_excludes_four_edge_paths() {
        let paths = chain().find_paths("A", 3, None).unwrap();
        let seqs: Vec<Vec<String>> = paths.iter().map(titles).collect();

        assert!(seqs.contains(&vec!["A".into(), "X".into()]));
        assert!(seqs.contains(&vec!["A".into(), "X".into(), "B".into()]));
        assert!(seqs.contains(&vec!["A".into(), "X".into(), "B".into(), "Y".into()]));
        // [A, X, B, Y, C] is 4 edges and must be cut off.
        assert!(!seqs.iter().any(|s| s.len() > 4));

        for path in &paths {
            assert!(path.hops() >= 1 && path.hops() <= 3);
            assert!(path.alternates());
        }
    }

    #[test]
    fn four_hop_bound_reaches_the_far_movie() {
        let paths = chain().find_paths("A", 4, None).unwrap();
        let seqs: Vec<Vec<String>> = paths.iter().map(titles).collect();
        assert!(seqs.contains(&vec![
            "A".into(),
            "X".into(),
            "B".into(),
            "Y".into(),
            "C".into()
        ]));
    }

    #[test]
    fn unknown_title_is_empty_not_an_error() {
        assert!(chain().find_paths("Zzzz", 3, None).unwrap().is_empty());
    }

    #[test]
    fn non_positive_hops_is_invalid_argument() {
        let err = chain().find_paths("A", 0, None).unwrap_err();
        assert!(matches!(err, ChainError::InvalidArgument(_)));
    }

    #[test]
    fn an_edge_is_never_walked_twice_in_one_path() {
        let mut g = LocalGraph::new();
        g.add_movie(movie(1, "A"));
        g.add_credit(1, "X");

        // The only move is A -> X; bouncing back over the same credit
        // is forbidden, so one path total.
        let paths = g.find_paths("A", 3, None).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(titles(&paths[0]), vec!["A".to_string(), "X".to_string()]);
    }

    #[test]
    fn nodes_may_reappear_via_different_edges() {
        // A and B share two actors; the cycle A-X-B-Y-A uses four
        // distinct edges and is a legal 4-hop path.
        let mut g = LocalGraph::new();
        g.add_movie(movie(1, "A"));
        g.add_movie(movie(2, "B"));
        for actor in ["X", "Y"] {
            g.add_credit(1, actor);
            g.add_credit(2, actor);
        }

        let paths = g.find_paths("A", 4, None).unwrap();
        let seqs: Vec<Vec<String>> = paths.iter().map(titles).collect();
        assert!(seqs.contains(&vec![
            "A".into(),
            "X".into(),
            "B".into(),
            "Y".into(),
            "A".into()
        ]));
    }

    #[test]
    fn duplicate_credits_do_not_multiply_paths() {
        let mut g = LocalGraph::new();
        g.add_movie(movie(1, "A"));
        g.add_credit(1, "X");
        g.add_credit(1, " X  ");

        assert_eq!(g.credit_count(), 1);
        assert_eq!(g.find_paths("A", 3, None).unwrap().len(), 1);
    }

    #[test]
    fn same_title_anchors_are_unioned() {
        // Two distinct movies titled "A", each with its own cast.
        let mut g = LocalGraph::new();
        g.add_movie(movie(1, "A"));
        g.add_movie(movie(10, "A"));
        g.add_credit(1, "X");
        g.add_credit(10, "Y");

        let paths = g.find_paths("A", 3, None).unwrap();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            match &path.entities[0] {
                PathEntity::Movie { id, title, .. } => {
                    assert_eq!(title, "A");
                    assert!(*id == 1 || *id == 10);
                }
                PathEntity::Actor { .. } => panic!("path must start at a movie"),
            }
        }
    }

    #[test]
    fn limit_caps_the_result_set() {
        let paths = chain().find_paths("A", 3, Some(2)).unwrap();
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn suggestions_match_substrings_case_insensitively() {
        let mut g = LocalGraph::new();
        g.add_movie(Movie {
            popularity: 12.0,
            ..movie(1, "Inception")
        });
        g.add_movie(Movie {
            popularity: 90.0,
            ..movie(2, "Inception 2: Deeper")
        });

        let hits = g.suggest("incep", 10);
        assert_eq!(hits.len(), 2);
        // Most popular first.
        assert_eq!(hits[0].title, "Inception 2: Deeper");

        assert!(g.suggest("Zzzz", 10).is_empty());
        assert_eq!(g.suggest("incep", 1).len(), 1);
    }
}
