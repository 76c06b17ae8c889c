use std::fmt::Debug;
use std::ops::Index;

// Compressed sparse row format for jagged array
#[derive(Clone, PartialEq, Eq)]
pub struct Jagged<T> {
    data: Vec<T>,
    head: Vec<u32>,
}

impl<T: Debug> Debug for Jagged<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v: Vec<&[T]> = self.iter().collect();
        v.fmt(f)
    }
}

impl<T, I> FromIterator<I> for Jagged<T>
where
    I: IntoIterator<Item = T>,
{
    fn from_iter<J>(iter: J) -> Self
    where
        J: IntoIterator<Item = I>,
    {
        let mut data = vec![];
        let mut head = vec![0];
        for row in iter {
            data.extend(row);
            head.push(data.len() as u32);
        }
        Jagged { data, head }
    }
}

impl<T: Clone> Jagged<T> {
    // Rows keep the relative order of `pairs`
    pub fn from_assoc_list(n: usize, pairs: &[(usize, T)]) -> Self {
        let mut head = vec![0u32; n + 1];
        for &(u, _) in pairs {
            head[u + 1] += 1;
        }
        for i in 1..=n {
            head[i] += head[i - 1];
        }

        let mut pos = head.clone();
        let mut order = vec![0; pairs.len()];
        for (i, &(u, _)) in pairs.iter().enumerate() {
            order[pos[u] as usize] = i;
            pos[u] += 1;
        }
        let data = order.into_iter().map(|i| pairs[i].1.clone()).collect();
        Jagged { data, head }
    }
}

impl Jagged<usize> {
    pub fn directed(n: usize, edges: &[[usize; 2]]) -> Self {
        let pairs: Vec<_> = edges.iter().map(|&[u, v]| (u, v)).collect();
        Self::from_assoc_list(n, &pairs)
    }

    pub fn undirected(n: usize, edges: &[[usize; 2]]) -> Self {
        let pairs: Vec<_> = edges
            .iter()
            .flat_map(|&[u, v]| [(u, v), (v, u)])
            .collect();
        Self::from_assoc_list(n, &pairs)
    }
}

impl<T> Jagged<T> {
    pub fn len(&self) -> usize {
        self.head.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        (0..self.len()).map(move |i| &self[i])
    }
}

impl<T> Index<usize> for Jagged<T> {
    type Output = [T];
    fn index(&self, index: usize) -> &[T] {
        let start = self.head[index] as usize;
        let end = self.head[index + 1] as usize;
        &self.data[start..end]
    }
}
