// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_traits::Zero;
use std::cmp::Ordering;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    pub fn new<T: PartialOrd + Zero>(v: &T) -> Option<Sign> {
        match v.partial_cmp(&Zero::zero()) {
            Some(Ordering::Less) => Some(Sign::Negative),
            Some(Ordering::Greater) => Some(Sign::Positive),
            _ => None,
        }
    }
}
