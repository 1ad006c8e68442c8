pub fn intersect_sorted<T: std::cmp::Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = vec![];
    let mut ai = 0;
    let mut bi = 0;
    while ai < a.len() && bi < b.len() {
        use std::cmp::Ordering;
        match Ord::cmp(&a[ai], &b[bi]) {
            Ordering::Equal => {
                out.push(a[ai].clone());
                ai += 1;
                bi += 1;
            }
            Ordering::Less => {
                ai += 1;
            }
            Ordering::Greater => {
                bi += 1;
            }
        }
    }
    out
}

/// is sorted `a` contained in sorted `b`
pub fn is_subset_sorted<T: std::cmp::Ord>(a: &[T], b: &[T]) -> bool {
    let mut bi = 0;
    for x in a {
        while bi < b.len() && b[bi] < *x {
            bi += 1;
        }
        if bi == b.len() || b[bi] != *x {
            return false;
        }
        bi += 1;
    }
    true
}

#[test]
fn test_intersect() {
    let a = [1, 2, 5, 8, 9];
    let b = [0, 2, 3, 4, 5, 9];
    assert_eq!(intersect_sorted(&a, &b), vec![2, 5, 9]);
    assert_eq!(intersect_sorted(&b, &a), vec![2, 5, 9]);

    let a: [u32; 0] = [];
    assert_eq!(intersect_sorted(&a, &b), vec![]);

    assert_eq!(intersect_sorted(&[2], &[3]), vec![]);
    assert_eq!(intersect_sorted(&[0], &[0, 1, 2, 3]), vec![0]);
    assert_eq!(intersect_sorted(&[3], &[0, 1, 2, 3]), vec![3]);
}

#[test]
fn test_subset() {
    assert!(is_subset_sorted::<u32>(&[], &[]));
    assert!(is_subset_sorted(&[], &[1]));
    assert!(is_subset_sorted(&[1, 3], &[0, 1, 2, 3]));
    assert!(!is_subset_sorted(&[1, 4], &[0, 1, 2, 3]));
    assert!(!is_subset_sorted(&[0, 1], &[1]));
}
