//! Category hierarchy over a flat taxon list.

use std::collections::{HashMap, HashSet};

use crate::domain::{Store, Taxon, TaxonId};

/// A taxon with its ordered child ids
#[derive(Debug, Clone)]
pub struct TaxonNode<'a> {
    pub taxon: &'a Taxon,
    pub children: Vec<TaxonId>,
}

/// Materialized taxon tree
///
/// Siblings are ordered by `(position, id)`. When ids repeat, the first
/// taxon with that id wins. Taxons whose parent is not in the list are
/// unreachable; `Catalog::validate` reports them.
#[derive(Debug, Clone, Default)]
pub struct TaxonTree<'a> {
    nodes: HashMap<TaxonId, TaxonNode<'a>>,
    roots: Vec<TaxonId>,
}

impl<'a> TaxonTree<'a> {
    pub fn build(taxons: &'a [Taxon]) -> Self {
        let mut nodes: HashMap<TaxonId, TaxonNode<'a>> = HashMap::with_capacity(taxons.len());
        for taxon in taxons {
            nodes.entry(taxon.id).or_insert_with(|| TaxonNode {
                taxon,
                children: Vec::new(),
            });
        }

        let mut sorted: Vec<&Taxon> = nodes.values().map(|node| node.taxon).collect();
        sorted.sort_by_key(|t| (t.position, t.id));

        let mut roots = Vec::new();
        for taxon in sorted {
            match taxon.parent_id {
                None => roots.push(taxon.id),
                Some(parent_id) => {
                    if let Some(parent) = nodes.get_mut(&parent_id) {
                        parent.children.push(taxon.id);
                    }
                }
            }
        }

        Self { nodes, roots }
    }

    pub fn get(&self, id: TaxonId) -> Option<&TaxonNode<'a>> {
        self.nodes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root taxons belonging to `store`
    pub fn roots(&self, store: &Store) -> Vec<&'a Taxon> {
        self.scoped(&self.roots, store)
    }

    /// Direct children of `id` belonging to `store`
    pub fn children(&self, id: TaxonId, store: &Store) -> Vec<&'a Taxon> {
        match self.nodes.get(&id) {
            Some(node) => self.scoped(&node.children, store),
            None => Vec::new(),
        }
    }

    /// Depth-first pre-order visit of every store-scoped taxon
    ///
    /// The callback receives each taxon with its depth (roots are 0). A
    /// child outside the store prunes its whole subtree. Each id is visited
    /// at most once.
    pub fn walk<F>(&self, store: &Store, mut visit: F)
    where
        F: FnMut(&'a Taxon, usize),
    {
        let mut stack: Vec<(&'a Taxon, usize)> =
            self.roots(store).into_iter().rev().map(|t| (t, 0)).collect();

        let mut visited = HashSet::new();

        while let Some((taxon, depth)) = stack.pop() {
            if !visited.insert(taxon.id) {
                continue;
            }
            visit(taxon, depth);

            for child in self.children(taxon.id, store).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    fn scoped(&self, ids: &[TaxonId], store: &Store) -> Vec<&'a Taxon> {
        ids.iter()
            .filter_map(|id| self.nodes.get(id))
            .map(|node| node.taxon)
            .filter(|t| t.in_store(store))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxon(id: TaxonId, parent_id: Option<TaxonId>, position: i64, stores: &[u64]) -> Taxon {
        Taxon {
            id,
            parent_id,
            position,
            name: format!("t{}", id),
            permalink: format!("t{}", id),
            navigable: true,
            store_ids: stores.to_vec(),
        }
    }

    #[test]
    fn test_children_ordered_by_position() {
        let taxons = vec![
            taxon(1, None, 0, &[1]),
            taxon(2, Some(1), 5, &[1]),
            taxon(3, Some(1), 1, &[1]),
            taxon(4, Some(1), 1, &[1]),
        ];
        let tree = TaxonTree::build(&taxons);
        let store = Store::new(1, "global");

        let ids: Vec<TaxonId> = tree.children(1, &store).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4, 2]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_walk_is_preorder_and_store_scoped() {
        let taxons = vec![
            taxon(1, None, 0, &[1]),
            taxon(2, Some(1), 0, &[1]),
            taxon(3, Some(2), 0, &[1]),
            taxon(4, Some(1), 1, &[1]),
            taxon(5, None, 1, &[1]),
            taxon(6, Some(5), 0, &[2]),
            taxon(7, Some(6), 0, &[1]),
        ];
        let tree = TaxonTree::build(&taxons);
        let store = Store::new(1, "global");

        let mut visited = Vec::new();
        tree.walk(&store, |t, depth| visited.push((t.id, depth)));

        assert_eq!(visited, vec![(1, 0), (2, 1), (3, 2), (4, 1), (5, 0)]);
    }

    #[test]
    fn test_repeated_ids_keep_first_and_terminate() {
        let mut dup = taxon(1, Some(1), 0, &[1]);
        dup.permalink = "kitchen/dup".to_string();
        let taxons = vec![taxon(1, None, 0, &[1]), dup, taxon(2, Some(1), 0, &[1])];
        let tree = TaxonTree::build(&taxons);
        let store = Store::new(1, "global");

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(1).unwrap().taxon.permalink, "t1");

        let mut visited = Vec::new();
        tree.walk(&store, |t, depth| visited.push((t.id, depth)));
        assert_eq!(visited, vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn test_self_parent_is_visited_once() {
        let taxons = vec![taxon(1, None, 0, &[1]), taxon(2, Some(2), 0, &[1])];
        let tree = TaxonTree::build(&taxons);
        let store = Store::new(1, "global");

        let mut visited = Vec::new();
        tree.walk(&store, |t, _| visited.push(t.id));
        assert_eq!(visited, vec![1]);
    }

    #[test]
    fn test_orphans_are_unreachable() {
        let taxons = vec![taxon(1, None, 0, &[1]), taxon(2, Some(42), 0, &[1])];
        let tree = TaxonTree::build(&taxons);
        let store = Store::new(1, "global");

        let mut visited = Vec::new();
        tree.walk(&store, |t, _| visited.push(t.id));
        assert_eq!(visited, vec![1]);
        assert!(tree.get(2).is_some());
    }
}
