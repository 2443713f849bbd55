// locate the slice of work that belongs to one thread
// [0, length) is cut into `num` contiguous parts and the id-th part is returned as [begin, end)
// num is positive, id is 0-indexed in [0, num)
//
// the remainder of length / num goes to the first parts, one element each:
// length = 10, num = 3 -> (0, 4), (4, 7), (7, 10)
// length = 11, num = 3 -> (0, 4), (4, 8), (8, 11)
// when length < num the trailing ids get nothing
pub fn assign(length: usize, num: usize, id: usize) -> Option<(usize, usize)> {
    debug_assert!(num != 0);
    debug_assert!(id < num);

    if length <= id {
        return None;
    }

    let (quotient, remainder) = (length / num, length % num);
    let begin = quotient * id + id.min(remainder);
    let end = begin + quotient + usize::from(id < remainder);
    Some((begin, end))
}
