/// The target role. Static for now — sourcing job descriptions from a feed or
/// a request surface is out of scope.
pub const JOB_DESCRIPTION: &str = "\
We are looking for a talented React Native Mobile Developer to join our dynamic \
development team. You will be responsible for building high-performance, scalable, \
and user-friendly mobile applications for both iOS and Android platforms using \
React Native.";
