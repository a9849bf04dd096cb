
// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
// Weighted by an explicit per-element weight instead of rank. Only roots carry
// weight; a root that gets absorbed hands its weight over and drops to 0.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	pub size: usize,
	parent: Vec<usize>,
	weight: Vec<usize>,
}

impl DisjointSet {
	#[cfg(test)]
	pub fn make_singletons(size: usize) -> DisjointSet {
		DisjointSet::with_weights(vec![1; size])
	}

	pub fn with_weights(weight: Vec<usize>) -> DisjointSet {
		let size = weight.len();
		DisjointSet {
			size,
			parent: (0..size).collect(),
			weight,
		}
	}

	/// Root of `x`'s set. Halves the path on the way up.
	pub fn find(&mut self, mut x: usize) -> usize {
		while self.parent[x] != x {
			let grandparent = self.parent[self.parent[x]];
			self.parent[x] = grandparent;
			x = grandparent;
		}
		x
	}

	/// Same answer as `find` without touching the forest.
	pub fn root_of(&self, mut x: usize) -> usize {
		while self.parent[x] != x {
			x = self.parent[x];
		}
		x
	}

	/// Merges the sets of `x` and `y`. The lighter root goes under the heavier
	/// one; on a tie `y`'s root goes under `x`'s. Returns false if they already
	/// shared a root.
	pub fn unite(&mut self, x: usize, y: usize) -> bool {
		let x_root = self.find(x);
		let y_root = self.find(y);
		if x_root == y_root {
			return false;
		}
		let (keep, absorb) = if self.weight[x_root] < self.weight[y_root] {
			(y_root, x_root)
		} else {
			(x_root, y_root)
		};
		self.parent[absorb] = keep;
		self.weight[keep] += self.weight[absorb];
		self.weight[absorb] = 0;
		true
	}

	/// Total weight of the set containing `x`.
	pub fn weight(&self, x: usize) -> usize {
		self.weight[self.root_of(x)]
	}

	// weight field as stored; 0 for every non-root
	pub fn raw_weight(&self, x: usize) -> usize {
		self.weight[x]
	}

	pub fn is_root(&self, x: usize) -> bool {
		self.parent[x] == x
	}

	pub fn roots<'a>(&'a self) -> impl Iterator<Item = usize> + 'a {
		(0..self.size).filter(move |&x| self.is_root(x))
	}
}
