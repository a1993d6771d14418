use elemat::{Complex, DenseMatrix, Norms, Tensor};
use rand::Rng;

fn main() {
    let n = 8;
    // random element "stiffness": A = MᵀM + I
    let mut rng = rand::thread_rng();
    let m = DenseMatrix::from_fn(n, n, |_, _| rng.gen_range(-1.0..1.0));
    let mut a = m.tmmult(&m).unwrap();
    for i in 0..n {
        a[(i, i)] += 1.0;
    }

    // two load cases solved in the same sweep as the inversion
    let mut rhs = DenseMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
    let mut inv = a.clone();
    let report = inv.solve_in_place(&mut rhs).unwrap();
    println!("pivots = {:?}", report.pivots());
    println!(
        "det A = {:e}, det via pivots = {:e}",
        a.determinant().unwrap(),
        report.determinant()
    );
    println!("x = {:?}", rhs.as_slice());
    println!(
        "|A|_1 = {:.4}, |A^-1|_1 = {:.4}, cond_1 = {:.4}",
        a.l1_norm(),
        inv.l1_norm(),
        a.l1_norm() * inv.l1_norm()
    );

    // small fixed-size tensors
    let t = Tensor::<3, f64>::from_row_major(&[1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0])
        .unwrap();
    println!("tensor l1 = {}, frobenius = {:.6}", t.l1_norm(), t.norm());

    let c = Tensor::<2, Complex<f64>>::from_rows([
        [Complex::new(1.0, 1.0), Complex::new(2.0, 0.0)],
        [Complex::new(0.0, -1.0), Complex::new(3.0, 2.0)],
    ]);
    match c.invert() {
        Ok(ci) => println!("complex inverse = {:?}", ci),
        Err(e) => println!("complex tensor is singular: {e}"),
    }
}
