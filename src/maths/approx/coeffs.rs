//! Fitted coefficient tables for the rational log2 approximants.
//!
//! Each table maps a mantissa `m` in `[0.5, 1.0)` to `log2(m)`. Degrees 1-4
//! were fitted with a linear program over 1e5 samples of `[0.5, 1.0]`;
//! degrees 5 and 6 were seeded by least squares on 38 points and refined by
//! differential evolution against the max error. The values must be kept
//! exactly as they are; `Degree::max_error` lists the worst-case error they
//! reach on `[1.0, 2.0]`.

use super::rational::Rational;

// (a*m + b) / (c*m + d)
pub(crate) const P1: Rational<2> = Rational::new(
    [1.4767235475800453, -1.477808113688585],
    [0.60987486544988612, 0.43559347328148307],
);

pub(crate) const P2: Rational<3> = Rational::new(
    [1.9127166899499954, -0.68851400593499545, -1.22420645509838],
    [0.49463685172392841, 1.426594307123505, 0.2533316901691966],
);

pub(crate) const P3: Rational<4> = Rational::new(
    [
        1.1098414161667869,
        1.4491119665946153,
        -2.0697678829202806,
        -0.48918550780729392,
    ],
    [
        0.22977948696488379,
        1.4961611668393175,
        1.071708023446889,
        0.084444549259932208,
    ],
);

pub(crate) const P4: Rational<5> = Rational::new(
    [
        0.59329970349044314,
        2.3979646338966889,
        -0.96358966800238843,
        -1.8439274267589987,
        -0.18374724264449727,
    ],
    [
        0.1068562844523792,
        1.2392957064266512,
        2.0062979261642901,
        0.63680961689938775,
        0.028211791264274255,
    ],
);

// leading numerator coefficient normalised to 1
pub(crate) const P5: Rational<6> = Rational::new(
    [
        1.0,
        7.71936522214048448375934,
        3.86819598045858414891995,
        -8.62625591215740072925655,
        -3.75643884533287897298237,
        -0.20486644510896143134282,
    ],
    [
        0.163694582050043557774899,
        2.92653202255549693688863,
        8.32056953375982644161013,
        5.87824918118857908666541,
        1.03190040649530079264196,
        0.0288076245100893947592713,
    ],
);

pub(crate) const P6: Rational<7> = Rational::new(
    [
        1.000000000000000000000e+00,
        1.264421020196026468341e+01,
        2.097757281182429878186e+01,
        -1.096689803557884168583e+01,
        -1.931053288761708230936e+01,
        -4.197137193704804758454e+00,
        -1.472148968838493110489e-01,
    ],
    [
        1.515951847105251049097e-01,
        3.923015269365503598920e+00,
        1.753784228757662333464e+01,
        2.219034855172147757685e+01,
        8.839440525270575221839e+00,
        9.965678875171709583114e-01,
        1.940841159387440492679e-02,
    ],
);
