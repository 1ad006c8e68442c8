use crate::Clique;

use crossbeam_channel::Sender;

/// Receives each maximal clique as soon as it is found, in no particular order.
pub trait Reporter {
    fn record(&mut self, clique: Clique);
}

/// Keeps every clique.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub cliques: Vec<Clique>,
}

impl Reporter for CollectingReporter {
    fn record(&mut self, clique: Clique) {
        debug_assert!(clique.len() > 1);
        self.cliques.push(clique);
    }
}

/// Only counts, for runs where holding all cliques would dominate memory.
#[derive(Debug, Default)]
pub struct CountingReporter {
    pub count: usize,
}

impl Reporter for CountingReporter {
    fn record(&mut self, _clique: Clique) {
        self.count += 1;
    }
}

/// Forwards cliques into a channel, merging the output of several workers.
///
/// The receiver must outlive the reporter: a clique that cannot be delivered
/// would leave the enumeration incomplete, so a failed send panics.
pub struct ChannelReporter(pub Sender<Clique>);

impl Reporter for ChannelReporter {
    fn record(&mut self, clique: Clique) {
        self.0.send(clique).expect("clique receiver hung up before the search finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_reporter_forwards() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut r = ChannelReporter(tx);
        r.record(vec![0, 1]);
        r.record(vec![1, 2, 3]);
        drop(r);
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![vec![0, 1], vec![1, 2, 3]]);
    }

    #[test]
    #[should_panic(expected = "clique receiver hung up")]
    fn channel_reporter_without_receiver() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        drop(rx);
        ChannelReporter(tx).record(vec![0, 1]);
    }
}
