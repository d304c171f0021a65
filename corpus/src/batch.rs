use ndarray::{s, Array2, ArrayView2};

use crate::CorpusError;

/// Truncates the ids to a multiple of the batch size and reshapes them row-major.
///
/// Row `i` holds the ids `[i * len, (i + 1) * len)` where `len = ids.len() / batch_size`. The
/// trailing `ids.len() % batch_size` ids are dropped.
///
/// # Errors
/// Fails if the batch size is zero or if there are fewer ids than the batch size.
pub(crate) fn reshape(
    mut ids: Vec<usize>,
    batch_size: usize,
) -> Result<Array2<usize>, CorpusError> {
    if batch_size == 0 {
        return Err(CorpusError::BatchSize);
    }
    let sequence_length = ids.len() / batch_size;
    if sequence_length == 0 {
        return Err(CorpusError::TooFewTokens {
            tokens: ids.len(),
            batch_size,
        });
    }

    ids.truncate(batch_size * sequence_length);
    Array2::from_shape_vec((batch_size, sequence_length), ids).map_err(Into::into)
}

/// A language model training window over a batch matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Window<'a> {
    /// The input ids of shape `(batch_size, len)`.
    pub inputs: ArrayView2<'a, usize>,
    /// The input ids shifted by one step, of the same shape.
    pub targets: ArrayView2<'a, usize>,
}

/// An iterator over the column windows of a batch matrix.
///
/// Created by [`Corpus::windows()`](crate::Corpus::windows).
pub struct Windows<'a> {
    batches: ArrayView2<'a, usize>,
    bptt: usize,
    offset: usize,
}

impl<'a> Windows<'a> {
    pub(crate) fn new(batches: ArrayView2<'a, usize>, bptt: usize) -> Result<Self, CorpusError> {
        if bptt == 0 {
            return Err(CorpusError::Bptt);
        }

        Ok(Self {
            batches,
            bptt,
            offset: 0,
        })
    }

    /// The number of steps which have a successor to predict.
    fn steps(&self) -> usize {
        self.batches.ncols().saturating_sub(1)
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.steps() {
            return None;
        }

        let start = self.offset;
        let len = self.bptt.min(self.steps() - start);
        self.offset += len;

        let batches = self.batches;
        Some(Window {
            inputs: batches.slice_move(s![.., start..start + len]),
            targets: batches.slice_move(s![.., start + 1..start + 1 + len]),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps().saturating_sub(self.offset);
        let windows = remaining / self.bptt + usize::from(remaining % self.bptt != 0);
        (windows, Some(windows))
    }
}

impl ExactSizeIterator for Windows<'_> {}
